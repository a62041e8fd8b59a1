//! Bundle Store Adapters
//!
//! Implementations of the `SurveyReader` and `ResponseReader` ports.
//!
//! ## Available Adapters
//!
//! - **FileBundleStore** - Reads a JSON or YAML bundle file
//! - **InMemoryBundleStore** - Holds a bundle in memory (testing/embedding)

mod file_bundle_store;
mod in_memory_bundle_store;

pub use file_bundle_store::{read_document, DocumentFormat, FileBundleStore};
pub use in_memory_bundle_store::InMemoryBundleStore;
