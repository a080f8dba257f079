//! CMS content domain: records, query documents, transport contract and client.

mod client;
mod error;
pub mod query;
mod transport;
mod types;

pub use client::ContentClient;
pub use error::ContentError;
pub use query::{
    decode_response, GraphqlQuery, GET_BROWSER_PAGE, GET_DOCK, GET_FOLDER_CATEGORIES, GET_HEADER,
};
pub use transport::{ContentFuture, GraphqlTransport, MemoryGraphqlTransport, NoopGraphqlTransport};
pub use types::*;
