//! Benchmark setup error type.

use netgen_core::NetworkError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Network parameter validation or generation failed.
    #[error("network operation failed: {0}")]
    Network(#[from] NetworkError),
}
