pub mod row;
pub mod snapshot;

// Re-exports for convenience
pub use row::*;
pub use snapshot::*;
