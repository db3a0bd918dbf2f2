use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: String,

    #[arg(long, default_value = backend::nhl_api::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, default_value = "frontend/dist/")]
    static_dir: std::path::PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("analysis")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    let client = backend::nhl_api::Client::new(args.api_base);

    let router = axum::Router::new()
        .nest("/api/", backend::api::router(Box::new(client)))
        .nest_service("/", tower_http::services::ServeDir::new(args.static_dir));

    let listener = tokio::net::TcpListener::bind(&args.bind).await.unwrap();
    tracing::info!("Listening on {:?}", args.bind);
    axum::serve(listener, router).await.unwrap();
}
