use reelstore::{AppState, config::Config, db, store::MovieStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelstore=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let app = reelstore::router(AppState { store })
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
