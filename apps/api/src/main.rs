use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use edgecloud_api::config::DEFAULT_LOG_FILTER;
use edgecloud_api::{build_router, Config, DefaultResolverCreator, SchemaBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing
    let (env_filter, filter_error) = match EnvFilter::try_new(config.log_filter()) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = filter_error {
        tracing::warn!(
            error = %e,
            filter = config.log_filter(),
            "Invalid log filter, using {}",
            DEFAULT_LOG_FILTER
        );
    }

    tracing::info!(
        environment = %config.common.environment,
        "Starting EdgeCloud API server on {}",
        config.common.http.bind_address()
    );

    let schema = SchemaBuilder::from_config(&config)
        .resolver_creator(DefaultResolverCreator::shared())
        .build();
    tracing::info!(
        depth_limit = config.graphql_depth_limit,
        complexity_limit = config.graphql_complexity_limit,
        introspection = config.graphql_introspection,
        "GraphQL schema built"
    );

    let app = build_router(&config, schema);

    let addr = config.common.http.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    if config.graphql_playground {
        tracing::info!("GraphQL Playground available at http://{}/graphql/playground", addr);
    } else if config.is_production() {
        tracing::info!("GraphQL Playground is never served in production");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
