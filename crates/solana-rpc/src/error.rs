use thiserror::Error;

/// Errors from address parsing, amount parsing and JSON-RPC calls.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("http status {status}")]
    Http { status: u16 },

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// True when the node answered with a JSON-RPC error object (request reached the node and was rejected).
    pub fn is_rejected_by_node(&self) -> bool {
        matches!(self, RpcError::Rpc { .. })
    }
}
