use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web"]
struct WebAssets;

const TITLE_PLACEHOLDER: &str = "{{ title }}";

/// Serve the landing page with the configured title
pub async fn index(State(state): State<AppState>) -> Html<String> {
    render_index(&state.config.title)
}

/// Render the embedded landing page, or a minimal page if it is missing
pub fn render_index(title: &str) -> Html<String> {
    let template = match <WebAssets as Embed>::get("index.html") {
        Some(content) => String::from_utf8_lossy(&content.data).into_owned(),
        None => FALLBACK_HTML.to_string(),
    };

    Html(template.replace(TITLE_PLACEHOLDER, &escape_html(title)))
}

/// Serve embedded static assets (scripts, styles)
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
</head>
<body>
    <h1>{{ title }}</h1>
    <form id="chat-form">
        <input id="chat-input" type="text" placeholder="Ask about hiring, pay or promotions">
        <button type="submit">Send</button>
    </form>
    <div id="chat-log"></div>
    <script src="/static/app.js"></script>
</body>
</html>
"#;
