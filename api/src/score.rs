//! The score loader server function.

use dioxus::prelude::*;

use crate::types::ScoreProps;

/// Loads the precomputed score for `username` ahead of the first render.
///
/// Proxies `GET {scheme}://{host}/api/score/{username}` on the server and
/// normalizes the result into [`ScoreProps`]. Upstream errors and transport
/// failures both come back as the `Failed` branch; the `Err` side of the
/// return type is reserved for the server-function transport itself.
#[server]
pub async fn fetch_score(username: String) -> Result<ScoreProps, ServerFnError> {
    use axum::http::{header::HOST, HeaderMap};
    use dioxus::logger::tracing;

    use crate::loader;

    let username = match loader::validate_username(&username) {
        Ok(name) => name,
        Err(props) => return Ok(props),
    };

    let headers: HeaderMap = extract().await?;
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let url = loader::score_url(host, username);

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("score fetch failed for {url}: {err}");
            return Ok(ScoreProps::service_unavailable());
        }
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("score body unreadable for {url}: {err}");
            return Ok(ScoreProps::service_unavailable());
        }
    };

    Ok(loader::props_from_response(status, &body))
}
