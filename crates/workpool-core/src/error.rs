//! Error types for pool construction

use core::fmt;
use std::io;

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors surfaced while bringing a pool up
///
/// Once a pool is constructed it has no transient failure modes of its own;
/// everything here happens before the first job can be scheduled.
#[derive(Debug)]
pub enum PoolError {
    /// Configuration rejected by `PoolConfig::validate`
    InvalidConfig(&'static str),

    /// The OS refused to spawn the dispatcher thread
    SpawnFailed(io::Error),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidConfig(reason) => write!(f, "invalid pool config: {}", reason),
            PoolError::SpawnFailed(e) => write!(f, "failed to spawn dispatcher thread: {}", e),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoolError::SpawnFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PoolError {
    fn from(e: io::Error) -> Self {
        PoolError::SpawnFailed(e)
    }
}
