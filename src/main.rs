use anyhow::Result;
use editorial_core::application::{
    ports::{ClockPort, DocumentStorePort},
    queries::sitemap::SitemapSettings,
    services::ApplicationServices,
};
use editorial_core::config::{AppConfig, LogFormat};
use editorial_core::domain::{column::ColumnReadRepository, sitemap::ContentRepository};
use editorial_core::infrastructure::{
    database,
    document_store::PostgresDocumentStore,
    repositories::{DocumentColumnReadRepository, DocumentContentRepository},
    time::SystemClock,
};
use editorial_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format());
    config.log_summary();

    let pool = database::init_pool(config.database_url(), config.fetch_timeout()).await?;
    database::run_migrations(&pool).await?;

    let store: Arc<DocumentStorePort> =
        Arc::new(PostgresDocumentStore::new(pool, config.fetch_timeout()));
    let column_repo: Arc<dyn ColumnReadRepository> =
        Arc::new(DocumentColumnReadRepository::new(Arc::clone(&store)));
    let content_repo: Arc<dyn ContentRepository> =
        Arc::new(DocumentContentRepository::new(Arc::clone(&store)));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        column_repo,
        content_repo,
        clock,
        SitemapSettings {
            site_root: config.site_root().clone(),
            fetch_limit: config.sitemap_fetch_limit(),
        },
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().into(),
        media_provider: Arc::new(config.media_provider().clone()),
    };

    let app = build_router(state);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));

    let initialised = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if initialised.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
