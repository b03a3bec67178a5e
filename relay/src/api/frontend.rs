use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct FrontendAssets;

const INDEX: &str = "index.html";

/// `GET /`: the chat page. Never touches upstream.
pub async fn serve_root() -> Response {
    tracing::info!("Home route accessed");

    match response_for_file(INDEX) {
        Some(response) => response,
        None => {
            tracing::error!("Embedded chat page {} is missing", INDEX);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn response_for_file(path: &str) -> Option<Response> {
    let file = FrontendAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let content_type = if mime.type_() == mime_guess::mime::TEXT {
        format!("{mime}; charset=utf-8")
    } else {
        mime.to_string()
    };

    let mut response = Response::new(Body::from(file.data.into_owned()));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type).ok()?,
    );
    Some(response)
}
