use desktop_host::{ContentError, GraphqlQuery};

pub async fn post_graphql(endpoint: &str, query: &GraphqlQuery) -> Result<String, ContentError> {
    Err(ContentError::Transport(format!(
        "{} against {endpoint} requires a browser target",
        query.operation_name
    )))
}

pub fn page_hostname() -> Option<String> {
    None
}

pub fn open_external_url(_url: &str) -> Result<(), String> {
    Ok(())
}
