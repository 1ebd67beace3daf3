use thiserror::Error;

/// Errors raised during a build pass.
///
/// All variants are caller-programming errors: they abort the current pass
/// with no partial result retained, and the owning [`Program`](crate::Program)
/// returns to its not-started state so a corrected pass can re-run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter was declared while no function was open.
    #[error("declared parameter '{base}' with no function open")]
    ParamOutsideFunction {
        /// Base name passed to the declaration.
        base: String,
    },
    /// A call site named an operation absent from the API description.
    #[error("unknown API operation '{name}'")]
    UnknownOperation {
        /// The name looked up.
        name: String,
    },
    /// URL template expansion failed.
    #[error(transparent)]
    Api(#[from] skein_api::Error),
}
