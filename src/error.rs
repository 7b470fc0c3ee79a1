use thiserror::Error;

/// Errors raised while building a [`Plan`](crate::Plan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Version number outside 1..=40.
    #[error("invalid QR version {0} (expected 1-40)")]
    InvalidVersion(u8),
}
