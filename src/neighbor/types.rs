// src/neighbor/types.rs

/// One neighbor as reported by the daemon. All three groups are always
/// present; peers missing any of them are rejected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerRecord {
    pub config: PeerConfig,
    pub state: PeerSessionState,
    pub timers: PeerTimers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerConfig {
    pub neighbor_address: String,
    pub peer_as: u32,
    pub router_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerSessionState {
    /// FSM state exactly as the daemon names it, e.g. "ESTABLISHED".
    pub fsm_state: String,
    pub out_queue_depth: u32,
    pub flap_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeerTimers {
    pub state: TimerState,
    pub config: TimerConfig,
}

/// Negotiated values, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    pub uptime: u64,
    pub negotiated_hold_time: u64,
    pub keepalive_interval: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerConfig {
    pub hold_time: u64,
}
