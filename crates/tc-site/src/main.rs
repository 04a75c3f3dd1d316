//! Tool Compare Site
//!
//! Server-rendered review and comparison pages.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use leptos::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use std::sync::Arc;
use tc_core::{sitemap, Catalog, SiteConfig, SystemClock};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod components;
mod pages;
mod state;

use app::App;
use state::SiteState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tc_site=debug,tc_core=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::default();
    let catalog = match Catalog::load(&config.content_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };
    let state = SiteState::new(catalog, config, Arc::new(SystemClock));

    let conf = match get_configuration(None).await {
        Ok(conf) => conf,
        Err(e) => {
            error!("Invalid Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let sitemap_state = state.clone();
    let context_state = state.clone();

    let app = Router::new()
        .route("/sitemap.xml", get(move || sitemap_xml(sitemap_state.clone())))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(context_state.clone()),
            App,
        )
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!(
        "Serving {} reviews and {} comparisons on http://{}",
        state.catalog.review_count(),
        state.catalog.comparison_count(),
        addr
    );
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        error!("Server error: {}", e);
    }
}

async fn sitemap_xml(state: SiteState) -> Response {
    match sitemap::render_sitemap(&state.catalog, &state.config) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(e) => {
            error!("Failed to render sitemap: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
