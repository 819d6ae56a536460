use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Content-Security-Policy for the page. WASM needs `wasm-unsafe-eval`,
/// Leptos emits inline styles, and badge images are served from `https:`.
/// The contact form posts through our own server function, so both
/// `connect-src` and `form-action` stay on `'self'`.
const CSP: &str = "default-src 'self'; \
    script-src 'self' 'wasm-unsafe-eval'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data: https:; \
    font-src 'self' data:; \
    connect-src 'self'; \
    frame-ancestors 'none'; \
    base-uri 'self'; \
    form-action 'self'";

const SECURITY_HEADERS: [(&str, &str); 7] = [
    // Prevent clickjacking
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    // Force HTTPS for 1 year
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    ("content-security-policy", CSP),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=()",
    ),
    ("cross-origin-opener-policy", "same-origin"),
];

/// Adds the security headers to every response.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}

pub const DEFAULT_RATE_LIMIT: usize = 5;
pub const DEFAULT_RATE_WINDOW_SECS: u64 = 60;

/// Per-IP sliding-window limiter for the paths under one prefix.
///
/// Clients are keyed on the TCP peer address. Forwarding headers are only
/// read when `trust_proxy` is set, and then only the entry appended by the
/// proxy itself (the rightmost one) is used.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    /// Map of IP addresses to their request history; clients with no request
    /// inside the window are evicted.
    requests: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
    prefix: &'static str,
    trust_proxy: bool,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_secs: u64, prefix: &'static str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_secs),
            prefix,
            trust_proxy: false,
        }
    }

    /// Keys clients on the proxy-reported address instead of the peer.
    #[must_use]
    pub const fn behind_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }

    /// Reads `CONTACT_RATE_LIMIT`, `CONTACT_RATE_WINDOW_SECS` and
    /// `TRUST_PROXY_HEADERS`; missing or unparsable limits fall back to 5
    /// requests per 60 seconds, and proxy headers are ignored unless the flag
    /// is `true` or `1`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, prefix: &'static str) -> Self {
        let parse = |key: &str| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .filter(|value| *value > 0)
        };
        let max_requests = parse("CONTACT_RATE_LIMIT")
            .and_then(|value| usize::try_from(value).ok())
            .unwrap_or(DEFAULT_RATE_LIMIT);
        let window_secs = parse("CONTACT_RATE_WINDOW_SECS").unwrap_or(DEFAULT_RATE_WINDOW_SECS);
        let trust_proxy = lookup("TRUST_PROXY_HEADERS")
            .is_some_and(|flag| matches!(flag.trim(), "true" | "1"));
        Self::new(max_requests, window_secs, prefix).behind_proxy(trust_proxy)
    }

    fn guards(&self, path: &str) -> bool {
        path.starts_with(self.prefix)
    }

    /// Check if a request from the given IP should be allowed
    async fn check_rate_limit(&self, ip: IpAddr) -> bool {
        let mut requests = self.requests.lock().await;
        let now = Instant::now();

        requests.retain(|_, history| {
            history.retain(|&time| now.duration_since(time) < self.window);
            !history.is_empty()
        });

        let history = requests.entry(ip).or_default();
        if history.len() < self.max_requests {
            history.push(now);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.requests.lock().await.len()
    }

    fn client_ip(&self, req: &Request<Body>) -> Option<IpAddr> {
        let peer = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        if !self.trust_proxy {
            return peer;
        }
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.rsplit(',').next())
                .and_then(|s| s.trim().parse::<IpAddr>().ok())
        };
        header("x-forwarded-for")
            .or_else(|| header("x-real-ip"))
            .or(peer)
    }
}

/// Middleware applying `limiter` to requests under its prefix.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    if limiter.guards(req.uri().path()) {
        let Some(ip) = limiter.client_ip(&req) else {
            tracing::warn!(path = %req.uri().path(), "No client address; serve with connect info");
            return Ok(next.run(req).await);
        };
        if !limiter.check_rate_limit(ip).await {
            tracing::warn!(%ip, path = %req.uri().path(), "Rate limit exceeded");
            return Err(StatusCode::TOO_MANY_REQUESTS);
        }
    }
    Ok(next.run(req).await)
}

/// Environment validation for `RUST_ENV=production`: the contact endpoint
/// must be configured over HTTPS and the public site URL must be set.
pub fn validate_production_env(lookup: impl Fn(&str) -> Option<String>) -> Result<(), Vec<String>> {
    let is_production = lookup("RUST_ENV").is_some_and(|env| env == "production");
    if !is_production {
        return Ok(());
    }

    let mut errors = Vec::new();
    match lookup("CONTACT_FORM_ENDPOINT").filter(|v| !v.trim().is_empty()) {
        None => errors.push("Missing required environment variable: CONTACT_FORM_ENDPOINT".to_string()),
        Some(endpoint) if !endpoint.trim().starts_with("https://") => {
            errors.push(format!("CONTACT_FORM_ENDPOINT must use https, got {endpoint}"));
        }
        Some(_) => {}
    }
    if lookup("SITE_URL").filter(|v| !v.trim().is_empty()).is_none() {
        errors.push("Missing required environment variable: SITE_URL".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
