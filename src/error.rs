use thiserror::Error;

/// Errors surfaced by the client, the choice resolver, and the caching
/// decorator.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction or request input.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The HTTP capability failed before producing a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream API answered with a non-200 status.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// A response body failed to decode.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Choice resolution hit the nesting guard. The tree is
    /// upstream-controlled input; anything this deep is treated as
    /// malformed rather than recursed into.
    #[error("choice nesting exceeds {limit} levels")]
    ChoiceDepthExceeded { limit: usize },

    /// The requested entity exists neither upstream nor in built-in data.
    #[error("not found: {0}")]
    NotFound(String),
}
