//! One-shot neighbor report for a GoBGP daemon.
//!
//! Connects to the daemon's gRPC API, asks for its neighbor list once and
//! renders every peer as a fixed six-line text block.

pub mod blocking;
pub mod config;
pub mod error;
pub mod grpc;
pub mod neighbor;
pub mod report;

pub use config::Config;
pub use error::ClientError;
pub use neighbor::PeerRecord;
