use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Connection to {endpoint} failed: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("Timed out after {after:?} waiting for {waiting_for}")]
    Timeout {
        after: Duration,
        waiting_for: &'static str,
    },

    #[error("GetNeighbor call failed: {0}")]
    Call(#[from] tonic::Status),

    #[error("Malformed peer #{index} in response: missing {field}")]
    MalformedPeer { index: usize, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
