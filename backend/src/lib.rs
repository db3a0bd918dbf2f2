pub mod api;
pub mod nhl_api;
pub mod schedule;

mod source;
pub use source::GameSource;
