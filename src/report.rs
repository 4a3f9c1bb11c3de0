use std::fmt;
use std::io::{self, Write};

use crate::neighbor::PeerRecord;

/// Six tab-indented lines, each ending in a newline.
impl fmt::Display for PeerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = &self.config;
        let state = &self.state;
        let timers = &self.timers;

        writeln!(
            f,
            "BGP neighbor is {}, remote AS {}",
            conf.neighbor_address, conf.peer_as
        )?;
        writeln!(f, "\tBGP version 4, remote router ID {}", conf.router_id)?;
        writeln!(
            f,
            "\tBGP state = {}, up for {}",
            state.fsm_state, timers.state.uptime
        )?;
        writeln!(
            f,
            "\tBGP OutQ = {}, Flops = {}",
            state.out_queue_depth, state.flap_count
        )?;
        writeln!(
            f,
            "\tHold time is {}, keepalive interval is {} seconds",
            timers.state.negotiated_hold_time, timers.state.keepalive_interval
        )?;
        writeln!(f, "\tConfigured hold time is {}", timers.config.hold_time)
    }
}

/// Write one block per peer, in the given order, with nothing in between.
pub fn write_report<W: Write>(out: &mut W, peers: &[PeerRecord]) -> io::Result<()> {
    for peer in peers {
        write!(out, "{}", peer)?;
    }
    out.flush()
}
