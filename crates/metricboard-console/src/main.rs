#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use metricboard_api::AppState;
    use metricboard_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    let catalog = appConfig.catalog();
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}, {} dashboard(s)",
        appConfig.server.bind,
        appConfig.server.port,
        catalog.dashboards.len()
    );

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    let addr: std::net::SocketAddr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse()
        .unwrap_or_else(|e| {
            tracing::warn!("invalid bind address in {configPath}: {e}, using Leptos site address");
            leptosOptions.site_addr
        });
    leptosOptions.site_addr = addr;

    let routes = generate_route_list(App);

    let apiRouter = metricboard_api::api_router(AppState::new(catalog.clone()));

    // Leptos routes carry LeptosOptions as state; the API router carries its own.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let catalog = catalog.clone();
                move || {
                    leptos::prelude::provide_context(catalog.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
