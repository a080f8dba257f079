//! Response cache contracts used by the content client.

mod content_cache;

pub use content_cache::{ContentCache, MemoryContentCache, NoopContentCache};
