use desktop_host::{ContentError, GraphqlQuery};
use gloo_net::http::Request;

pub async fn post_graphql(endpoint: &str, query: &GraphqlQuery) -> Result<String, ContentError> {
    let response = Request::post(endpoint)
        .json(&query.request_body())
        .map_err(|err| ContentError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ContentError::Transport(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(super::describe_http_error(status, &body));
    }

    response
        .text()
        .await
        .map_err(|err| ContentError::Transport(err.to_string()))
}

pub fn page_hostname() -> Option<String> {
    web_sys::window().and_then(|window| window.location().hostname().ok())
}

pub fn open_external_url(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|err| format!("window.open failed: {err:?}"))
}
