// Providers layer - pluggable capabilities behind trait seams
pub mod blob_store;

pub use blob_store::{BlobStore, FsBlobStore};
