use axum::{response::Html, routing::get, Router};
use crate::state::AppState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Flight Booking API</title>
    <style>
        body { font-family: Arial, sans-serif; background-color: #f4f4f4; text-align: center; padding-top: 100px; }
        h1 { color: #333; }
        code { background: #e8e8e8; padding: 2px 6px; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>Acme Air API is Running</h1>
    <p>Try <code>GET /api/flights/search?origin=Wellington&amp;destination=Auckland</code></p>
</body>
</html>
"#;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
