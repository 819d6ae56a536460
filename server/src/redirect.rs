use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header::LOCATION},
    middleware::Next,
};

/// Target of a `www.` host redirect, or `None` when the host is already bare.
pub fn bare_host_location(host: &str, path_and_query: &str) -> Option<String> {
    host.strip_prefix("www.")
        .map(|bare| format!("https://{bare}{path_and_query}"))
}

/// Permanently redirects `www.` hosts to the bare domain, keeping the path.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let location = req
        .headers()
        .get("host")
        .and_then(|host| host.to_str().ok())
        .and_then(|host| {
            let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
            bare_host_location(host, path_query)
        });

    if let Some(location) = location {
        tracing::debug!(%location, "Redirecting www host");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(?err, "Failed to build redirect response");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};
    use tower::ServiceExt as _;

    fn router() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .layer(axum::middleware::from_fn(redirect_www))
    }

    #[test]
    fn test_bare_host_location() {
        assert_eq!(
            bare_host_location("www.jpsolis.dev", "/sitemap.xml?x=1"),
            Some("https://jpsolis.dev/sitemap.xml?x=1".to_string())
        );
        assert_eq!(bare_host_location("jpsolis.dev", "/"), None);
    }

    #[tokio::test]
    async fn test_www_host_is_redirected_permanently() {
        let request = Request::builder()
            .uri("/robots.txt")
            .header("host", "www.jpsolis.dev")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[LOCATION], "https://jpsolis.dev/robots.txt");
    }

    #[tokio::test]
    async fn test_bare_host_passes_through() {
        let request = Request::builder()
            .uri("/")
            .header("host", "jpsolis.dev")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
