#![recursion_limit = "256"]

mod redirect;
mod security;
mod utils;

use std::net::SocketAddr;
use std::sync::Arc;

use app::{component, config::ContactConfig, form_client::FormClient, shell, types::AppState};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::{RateLimiter, rate_limit, security_headers, validate_production_env};
use serde_json::json;

use tower_http::compression::predicate::SizeAbove;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utils::{robots_handler, site_url_from, sitemap_handler};

/// Only the server-function namespace is rate limited; pages and assets are not.
const RATE_LIMITED_PREFIX: &str = "/api/";

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
}

/// Wraps `router` in tracing, the `www` redirect, security headers, the
/// contact rate limit and response compression.
fn harden<S>(router: Router<S>, limiter: RateLimiter) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn(security_headers))
                .layer(axum::middleware::from_fn_with_state(limiter, rate_limit)),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let env_lookup = |key: &str| std::env::var(key).ok();
    if let Err(errors) = validate_production_env(env_lookup) {
        for error in &errors {
            tracing::error!(%error, "Invalid production environment");
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let contact_config = ContactConfig::from_env();
    let contact_form = match FormClient::new(&contact_config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(?err, "Failed to build contact form client");
            return;
        }
    };
    tracing::info!(endpoint = %contact_form.endpoint(), "Contact form delivery configured");

    let app_state = AppState {
        contact_form: Arc::new(contact_form),
        leptos_options: Arc::new(leptos_options.clone()),
        site_url: site_url_from(env_lookup),
    };
    let limiter = RateLimiter::from_lookup(env_lookup, RATE_LIMITED_PREFIX);

    let router = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .merge(service_routes())
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell));
    let app = harden(router, limiter).with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    // Connect info gives the rate limiter each client's peer address.
    let make_service = app.into_make_service_with_connect_info::<SocketAddr>();
    if let Err(err) = axum::serve(listener, make_service).await {
        logging::error!("Failed to serve app: {}", err);
        logging::error!("Error details: {:?}", err);
    } else {
        logging::log!("Server shutdown gracefully");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header::LOCATION};
    use tower::ServiceExt as _;

    fn test_state() -> AppState {
        let options = LeptosOptions::builder().output_name("portfolio").build();
        AppState {
            contact_form: Arc::new(FormClient::new(&ContactConfig::default()).unwrap()),
            leptos_options: Arc::new(options),
            site_url: "https://jpsolis.dev".to_owned(),
        }
    }

    fn test_app() -> Router {
        harden(service_routes(), RateLimiter::new(5, 60, RATE_LIMITED_PREFIX))
            .with_state(test_state())
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_health_handler_structure() {
        tokio_test::block_on(async {
            let json_value = health_handler().await.unwrap().0;
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], "portfolio");
            assert!(json_value.get("timestamp").is_some());
            assert!(json_value.get("version").is_some());
        });
    }

    #[tokio::test]
    async fn test_sitemap_route_uses_site_url() {
        let (status, body) = get_body("/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<loc>https://jpsolis.dev/</loc>"));
    }

    #[tokio::test]
    async fn test_robots_route() {
        let (status, body) = get_body("/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://jpsolis.dev/sitemap.xml"));
    }

    #[tokio::test]
    async fn test_hardened_routes_carry_security_headers() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert!(response.headers().contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_hardened_routes_redirect_www() {
        let request = Request::builder()
            .uri("/health")
            .header("host", "www.jpsolis.dev")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[LOCATION], "https://jpsolis.dev/health");
    }
}
