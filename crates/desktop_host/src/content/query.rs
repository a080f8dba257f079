//! GraphQL documents and response envelope decoding for the CMS content API.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{ContentError, ContentTree, DockContent, FolderCategory, HeaderContent, PageDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named query document sent to the CMS.
pub struct GraphqlQuery {
    /// GraphQL `operationName`; also the cache key.
    pub operation_name: &'static str,
    /// Query document text.
    pub document: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// JSON request body posted to the GraphQL endpoint.
pub struct GraphqlRequestBody<'a> {
    /// Query document text.
    pub query: &'a str,
    /// Operation to execute.
    pub operation_name: &'a str,
}

impl GraphqlQuery {
    /// Builds the POST body for this query.
    pub fn request_body(&self) -> GraphqlRequestBody<'_> {
        GraphqlRequestBody {
            query: self.document,
            operation_name: self.operation_name,
        }
    }
}

/// Pinned dock entries.
pub const GET_DOCK: GraphqlQuery = GraphqlQuery {
    operation_name: "GetDock",
    document: r#"query GetDock {
  dock {
    dockItem {
      title
      reactIconName
      url
      modalSlug
      reactIconColor
      icon { url }
    }
  }
}"#,
};

/// Header logo, menus and social links.
pub const GET_HEADER: GraphqlQuery = GraphqlQuery {
    operation_name: "GetHeader",
    document: r#"query GetHeader {
  header {
    logo { url }
    menus {
      label
      items { text modalSlug }
    }
    socialLinks { iconName url }
  }
}"#,
};

/// Category → folder → item → sub-item content tree.
pub const GET_FOLDER_CATEGORIES: GraphqlQuery = GraphqlQuery {
    operation_name: "FolderCategories",
    document: r#"query FolderCategories {
  folderCategories(sort: "order:asc") {
    documentId
    name
    desktop_folders {
      documentId
      uuid
      title
      modalSlug
      icon { url }
      items {
        id
        title: Title
        reactIcon
        reactIconColor
        modalSlug
        icon { url }
        url
        subItem {
          id
          text
          contentItems {
            id
            image { url }
          }
          modalSlug
          image { url }
        }
      }
    }
  }
}"#,
};

/// Rich-content page rendered by the browser modal.
pub const GET_BROWSER_PAGE: GraphqlQuery = GraphqlQuery {
    operation_name: "GetBrowserModal",
    document: r#"query GetBrowserModal {
  browserModal {
    title
    backgroundColor
    textColor
    content {
      __typename
      ... on ComponentSectionsSectionGroup {
        id
        backgroundColor
      }
      ... on ComponentSectionsRichTextSection {
        id
        paragraphText
        backgroundColor
        placementRich: placement
      }
      ... on ComponentSectionsHeadingSection {
        id
        heading
        textSize
        color
        backgroundColor
        placementHeading: placement
      }
      ... on ComponentSectionsImageSection {
        id
        image { url }
        width
        height
        backgroundColor
        placementImage: placement
      }
      ... on ComponentSectionsGallerySection {
        id
        images { url }
        columns
        rows
        gap
        backgroundColor
        placementGallery: placement
      }
    }
  }
}"#,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One entry of the GraphQL `errors` array.
pub struct GraphqlErrorEntry {
    /// Human-readable message.
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
/// Standard GraphQL response envelope.
pub struct GraphqlResponse<T> {
    /// Result payload; absent when the whole request failed.
    #[serde(default)]
    pub data: Option<T>,
    /// Field or request errors.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

/// Decodes a raw GraphQL response body into `T`.
///
/// # Errors
///
/// Returns [`ContentError::Graphql`] when the server reported errors and no data,
/// [`ContentError::Decode`] for malformed JSON, and [`ContentError::MissingData`] when `data` is
/// absent without errors.
pub fn decode_response<T: DeserializeOwned>(
    operation_name: &'static str,
    raw: &str,
) -> Result<T, ContentError> {
    let response: GraphqlResponse<T> =
        serde_json::from_str(raw).map_err(|err| ContentError::Decode(err.to_string()))?;
    let errors = response.errors.unwrap_or_default();
    match response.data {
        Some(data) => Ok(data),
        None if !errors.is_empty() => Err(ContentError::Graphql(
            errors.into_iter().map(|entry| entry.message).collect(),
        )),
        None => Err(ContentError::MissingData(operation_name)),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DockData {
    #[serde(default)]
    pub dock: Option<DockContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HeaderData {
    #[serde(default)]
    pub header: Option<HeaderContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FolderCategoriesData {
    #[serde(default)]
    pub folder_categories: Option<Vec<FolderCategory>>,
}

impl From<FolderCategoriesData> for ContentTree {
    fn from(data: FolderCategoriesData) -> Self {
        Self {
            categories: data.folder_categories.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrowserPageData {
    #[serde(default)]
    pub browser_modal: Option<PageDocument>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_body_uses_camel_case_operation_name() {
        let body = serde_json::to_value(GET_DOCK.request_body()).expect("serialize");
        assert_eq!(body["operationName"], "GetDock");
        assert!(body["query"].as_str().unwrap().contains("dockItem"));
    }

    #[test]
    fn decode_response_reports_graphql_errors_without_data() {
        let err = decode_response::<DockData>(
            "GetDock",
            r#"{"data":null,"errors":[{"message":"Forbidden access"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, ContentError::Graphql(vec!["Forbidden access".into()]));
    }

    #[test]
    fn decode_response_distinguishes_missing_data_and_bad_json() {
        assert_eq!(
            decode_response::<DockData>("GetDock", "{}").unwrap_err(),
            ContentError::MissingData("GetDock")
        );
        assert!(matches!(
            decode_response::<DockData>("GetDock", "not json"),
            Err(ContentError::Decode(_))
        ));
    }

    #[test]
    fn decode_response_keeps_partial_data_alongside_errors() {
        let data = decode_response::<HeaderData>(
            "GetHeader",
            r#"{"data":{"header":{"menus":[{"label":"File","items":null}]}},"errors":[{"message":"logo"}]}"#,
        )
        .expect("partial data");
        let header = data.header.expect("header");
        assert_eq!(header.menus[0].label, "File");
        assert!(header.menus[0].items.is_empty());
    }
}
