//! Workspace error type.
//!
//! Sub-crates may define their own error enums and convert them into `MqError`
//! via `From` impls, or keep them separate and wrap `MqError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `mq-core` and a common base for sub-crates.
///
/// The simulation loop itself is infallible — every formula is total over its
/// numeric domain.  Errors arise only at the edges: scenario-name parsing and
/// collaborator-side configuration checks.
#[derive(Debug, Error)]
pub enum MqError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mq-*` crates.
pub type MqResult<T> = Result<T, MqError>;
