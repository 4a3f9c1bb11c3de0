// src/neighbor/mod.rs

mod convert;
mod types;


// Public exports
pub use convert::{from_response, from_wire};
pub use types::{PeerConfig, PeerRecord, PeerSessionState, PeerTimers, TimerConfig, TimerState};
