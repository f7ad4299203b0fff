use axum::http::{request::Parts, HeaderValue};
use glob::Pattern;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Compiles allowed origins such as `vscode-webview://*` or `https://*.vscode-cdn.net`.
/// Invalid patterns are logged and skipped.
pub fn compile_patterns(origins: &[String]) -> Vec<Pattern> {
    origins
        .iter()
        .filter_map(|o| match Pattern::new(o) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Invalid CORS origin pattern '{}': {}", o, e);
                None
            }
        })
        .collect()
}

pub fn layer(origins: &[String]) -> CorsLayer {
    let patterns = compile_patterns(origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| patterns.iter().any(|p| p.matches(o)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
