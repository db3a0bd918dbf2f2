pub mod coordinates;
pub mod playbyplay;
pub mod roster;
pub mod shots;
