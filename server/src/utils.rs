use app::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use tracing::error;

pub const DEFAULT_SITE_URL: &str = "http://127.0.0.1:3007";

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Public base URL from `SITE_URL`, without a trailing slash.
pub fn site_url_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("SITE_URL")
        .map(|url| url.trim().trim_end_matches('/').to_owned())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned())
}

/// Pages listed in the sitemap: the single page and its CV downloads.
const SITEMAP_ENTRIES: [(&str, &str, &str); 3] = [
    ("/", "monthly", "1.0"),
    ("/cv/JuanPabloSolis_CV.pdf", "yearly", "0.5"),
    ("/cv/JuanPabloSolis_CV_ES.pdf", "yearly", "0.5"),
];

pub fn sitemap_xml(site_url: &str) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (path, freq, priority) in SITEMAP_ENTRIES {
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{site_url}{path}</loc>")?;
        writeln!(sitemap, "<changefreq>{freq}</changefreq>")?;
        writeln!(sitemap, "<priority>{priority}</priority>")?;
        sitemap.push_str("</url>\n");
    }
    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

#[must_use]
pub fn robots_txt(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response<String> {
    match sitemap_xml(&state.site_url) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to build sitemap");
            build_response(
                "Failed to build sitemap".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

pub async fn robots_handler(State(state): State<AppState>) -> Response<String> {
    build_response(
        robots_txt(&state.site_url),
        "text/plain; charset=utf-8",
        StatusCode::OK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_defaults_and_trims() {
        assert_eq!(site_url_from(|_| None), DEFAULT_SITE_URL);
        assert_eq!(site_url_from(|_| Some("   ".to_owned())), DEFAULT_SITE_URL);
        assert_eq!(
            site_url_from(|_| Some("https://jpsolis.dev/".to_owned())),
            "https://jpsolis.dev"
        );
    }

    #[test]
    fn test_sitemap_lists_site_root() {
        let sitemap = sitemap_xml("https://jpsolis.dev").unwrap();
        assert!(sitemap.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(sitemap.contains("<loc>https://jpsolis.dev/</loc>"));
        assert!(sitemap.contains("<loc>https://jpsolis.dev/cv/JuanPabloSolis_CV_ES.pdf</loc>"));
        assert_eq!(sitemap.matches("<url>").count(), SITEMAP_ENTRIES.len());
        assert!(sitemap.ends_with("</urlset>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt("https://jpsolis.dev");
        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Sitemap: https://jpsolis.dev/sitemap.xml"));
    }

    #[test]
    fn test_build_response_sets_content_type() {
        let response = build_response("ok".to_string(), "text/plain", StatusCode::OK);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/plain");
        assert_eq!(response.body(), "ok");
    }

    #[test]
    fn test_handler_signatures() {
        let _: fn(State<AppState>) -> _ = sitemap_handler;
        let _: fn(State<AppState>) -> _ = robots_handler;
    }
}
