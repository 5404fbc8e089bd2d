//! Host documents.
//!
//! Endpoint kind "page": full HTML documents anchoring client-side component
//! sessions. The template engine is an external collaborator; these are
//! small literal documents with route values interpolated.

use axum::{extract::Path, http::Uri, response::Html};

pub async fn index() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Component Host</title>\
         <link rel=\"stylesheet\" href=\"/css/site.css\" /></head>\n\
         <body data-page=\"Index\"><div id=\"app\">Loading...</div>\
         <script src=\"/_blazor\"></script></body>\n</html>\n",
    )
}

/// Host document for the prerendered mount.
///
/// Also serves as the mount's fallback endpoint; the URI it reports is the
/// inner route value, with the mount's path base already stripped.
pub async fn prerendered_host(uri: Uri) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Prerendered Host</title></head>\n\
         <body data-page=\"PrerenderedHost\" data-inner-path=\"{}\">\
         <div id=\"app\">prerendered</div></body>\n</html>\n",
        uri.path()
    ))
}

/// Host document for the start-modes mount, parameterized by `{mode}`.
pub async fn start_modes_host(Path(mode): Path<String>) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Start Modes Host</title></head>\n\
         <body data-page=\"StartModesHost\" data-mode=\"{}\">\
         <div id=\"app\">start mode: {}</div></body>\n</html>\n",
        mode, mode
    ))
}
