use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    promo_observability::init();

    let settings = promo_store::StoreSettings::from_env()?;
    let services = Arc::new(promo_api::app::services::build_services(&settings).await?);
    let app = promo_api::app::build_app(services);

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
