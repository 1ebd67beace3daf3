use thiserror::Error;

/// Errors raised while expanding a URL template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller supplied the wrong number of expression fragments for the
    /// template's parameters.
    #[error("URL template expects {expected} argument(s), got {got}")]
    ArityMismatch {
        /// Number of parameters in the template.
        expected: usize,
        /// Number of arguments supplied.
        got: usize,
    },
}
