#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use staffdesk_web::config::ServerConfig;
    use std::path::Path;
    use tower::ServiceBuilder;
    use tower_http::services::{ServeDir, ServeFile};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!(site_root = %config.site_root, "Loaded configuration");

    // Unknown paths fall back to index.html so the client router can resolve
    // deep links such as /admin/edit-user/7.
    let site_root = Path::new(&config.site_root);
    let site = ServeDir::new(site_root).fallback(ServeFile::new(site_root.join("index.html")));

    let app = Router::new()
        .fallback_service(site)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(not(feature = "server"))]
fn main() {
    #[cfg(feature = "csr")]
    staffdesk_web::start();
}
