//! Entry domain entities.

pub mod model;
pub mod view;

pub use model::{CreateEntry, Entry, EntryKind};
pub use view::{Listing, SearchHit};
