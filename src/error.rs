use thiserror::Error;

/// The two failure kinds a price fetch can end in.
///
/// Either the request never produced a usable body (`Transport`), or the body
/// arrived but did not carry the shape the report needs (`Malformed`). There
/// is no partial outcome: a report exists only if neither occurred.
#[derive(Error, Debug)]
pub enum PriceError {
    /// Network unreachable, DNS failure, non-2xx status, or a body that
    /// could not be read. Carries the underlying cause.
    #[error("transport failure: {cause}")]
    Transport { cause: anyhow::Error },

    /// The body is not valid JSON or lacks an expected field; the message
    /// names what is missing.
    #[error("malformed price response: {0}")]
    Malformed(String),
}
