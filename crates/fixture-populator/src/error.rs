use thiserror::Error;

/// Boxed error raised by constructors, producers and mutators supplied by callers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while feeding one value through one mutator.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("arity mismatch: expected {expected} argument(s), found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("value producer failed: {0}")]
    ProducerFailed(#[source] BoxError),

    #[error("mutator failed: {0}")]
    MutatorFailed(#[source] BoxError),
}

/// Errors from configuring a populator or building a fixture.
#[derive(Debug, Error)]
pub enum PopulateError {
    #[error("the property name can not be empty")]
    EmptyPropertyName,

    #[error("failed to construct {bean}: {source}")]
    Construction {
        bean: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("failed to populate {bean}.{property} via {method}: {source}")]
    Invocation {
        bean: &'static str,
        method: String,
        property: String,
        #[source]
        source: InvocationError,
    },
}

/// Convenience type alias for populator results.
pub type PopulateResult<T> = Result<T, PopulateError>;
