//! Post-generation hook. The line the model returns is relayed as-is unless a
//! validator rejects it. The default accepts everything.
//!
//! `AppState` holds an `Arc<dyn LineValidator>`, swapped at startup.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("line rejected: {reason}")]
pub struct LineRejected {
    pub reason: String,
}

pub trait LineValidator: Send + Sync {
    /// Returns the line to relay (possibly rewritten) or rejects it.
    fn review(&self, line: String) -> Result<String, LineRejected>;
}

/// Accepts every line unchanged.
pub struct PassThroughValidator;

impl LineValidator for PassThroughValidator {
    fn review(&self, line: String) -> Result<String, LineRejected> {
        Ok(line)
    }
}
