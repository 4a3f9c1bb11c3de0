// src/neighbor/convert.rs
//
// Wire (gobgpapi) messages to PeerRecord.

use crate::error::ClientError;
use crate::grpc::gobgpapi;

use super::types::{PeerConfig, PeerRecord, PeerSessionState, PeerTimers, TimerConfig, TimerState};

/// Convert the peer at position `index` of a GetNeighbor response.
pub fn from_wire(index: usize, peer: gobgpapi::Peer) -> Result<PeerRecord, ClientError> {
    let missing = |field| ClientError::MalformedPeer { index, field };

    let conf = peer.conf.ok_or_else(|| missing("conf"))?;
    let info = peer.info.ok_or_else(|| missing("info"))?;
    let timers = peer.timers.ok_or_else(|| missing("timers"))?;
    let timers_state = timers.state.ok_or_else(|| missing("timers.state"))?;
    let timers_config = timers.config.ok_or_else(|| missing("timers.config"))?;

    Ok(PeerRecord {
        config: PeerConfig {
            neighbor_address: conf.neighbor_address,
            peer_as: conf.peer_as,
            router_id: conf.id,
        },
        state: PeerSessionState {
            fsm_state: info.bgp_state,
            out_queue_depth: info.out_q,
            flap_count: info.flops,
        },
        timers: PeerTimers {
            state: TimerState {
                uptime: timers_state.uptime,
                negotiated_hold_time: timers_state.negotiated_hold_time,
                keepalive_interval: timers_state.keepalive_interval,
            },
            config: TimerConfig {
                hold_time: timers_config.hold_time,
            },
        },
    })
}

/// Convert every peer, keeping the daemon's order. The first malformed peer
/// fails the whole response.
pub fn from_response(
    response: gobgpapi::GetNeighborResponse,
) -> Result<Vec<PeerRecord>, ClientError> {
    response
        .peers
        .into_iter()
        .enumerate()
        .map(|(index, peer)| {
            from_wire(index, peer).map_err(|e| {
                log::warn!("rejecting neighbor response: {}", e);
                e
            })
        })
        .collect()
}
