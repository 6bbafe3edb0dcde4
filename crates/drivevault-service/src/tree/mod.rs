//! Tree-integrity algorithms: path resolution, cycle guarding, and
//! cascade deletion.

pub mod cascade;
pub mod cycle;
pub mod path;

pub use cascade::CascadeDeleter;
pub use cycle::CycleGuard;
pub use path::PathResolver;
