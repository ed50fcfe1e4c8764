//! Small utilities shared across the crate.

mod cancellation;

pub use cancellation::CancellationToken;
