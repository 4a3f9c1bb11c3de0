// src/blocking.rs
//
// Synchronous entry point for one-shot callers.

use tokio::runtime::Builder;

use crate::config::Config;
use crate::error::ClientError;
use crate::grpc;
use crate::neighbor::PeerRecord;

/// Must not be called from inside an async runtime.
pub fn fetch_neighbors(config: &Config) -> Result<Vec<PeerRecord>, ClientError> {
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(grpc::fetch_neighbors(config))
}
