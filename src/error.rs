/// Errors raised while setting up a function call
///
/// Problems with individual argument values are never errors: they turn
/// into `NULL` results instead (see [`crate::Membership::Undefined`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("{name} expects exactly {expected} argument(s), got {actual}")]
    ArgumentCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Too many values (limit is {limit})")]
    TooManyValues { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
