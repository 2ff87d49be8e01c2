use luxesite::app;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxesite=debug".into()),
        )
        .init();

    let app = app();

    let addr = format!(
        "0.0.0.0:{}",
        std::env::var("PORT").unwrap_or_else(|_| "8090".into())
    );
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Server starting at http://{addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
