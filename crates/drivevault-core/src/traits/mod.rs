//! Abstract traits implemented by infrastructure crates.

pub mod blob;

pub use blob::{BlobStore, ByteStream};
