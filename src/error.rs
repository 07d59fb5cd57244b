use thiserror::Error;

/// Error types for hsd client operations
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-success HTTP status. The body is
    /// carried verbatim; hsd usually puts a JSON error document in it.
    #[error("HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    /// A 2xx response carried an embedded `error` field, or an RPC response
    /// body could not be interpreted (then the message is the raw text).
    #[error("{0}")]
    Api(String),

    /// The RPC envelope reported an error; `code` and `message` are the
    /// server's values, verbatim.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// Connection-level failure from the underlying HTTP stack.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body did not match the declared shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;
