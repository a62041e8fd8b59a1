//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `bundle` - Survey bundle stores (file, in-memory)

pub mod bundle;

pub use bundle::{read_document, DocumentFormat, FileBundleStore, InMemoryBundleStore};
