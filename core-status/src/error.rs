use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Status endpoint answered HTTP {0}")]
    UnexpectedStatus(u16),
}

pub type Result<T> = std::result::Result<T, StatusError>;
