//! The web-fetch scenario topology.
//!
//! Server `S` answers a request from client `C` with a web page split
//! into a burst of packets. The reply crosses three switches — `S4`,
//! `S2`, `S1` — with a slow satellite link between `S2` and `S1` acting
//! as the bottleneck. A second client `D1` and switch `S3` hang off the
//! side of the network; they take no part in the burst but are part of
//! the topology.

use anyhow::Result;
use delaysim_core::{
    measure::{Bandwidth, Distance, SignalSpeed},
    network::Network,
    node::NodeId,
};
use std::time::Duration;

/// Build the scenario network and the path the burst takes
/// (`S → S4 → S2 → S1 → C`).
pub fn web_fetch() -> Result<(Network, Vec<NodeId>)> {
    let mut network = Network::new();

    let bw = |s: &str| s.parse::<Bandwidth>();
    let m = Distance::from_metres;

    // client access link
    let l1 = network
        .new_link()
        .set_bandwidth(bw("100mbps")?)
        .set_length(m(240))
        .set_signal_speed(SignalSpeed::CABLE)
        .build()?;
    // geostationary satellite hop
    let l2 = network
        .new_link()
        .set_bandwidth(bw("100kbps")?)
        .set_length(m(42_000_000))
        .set_signal_speed(SignalSpeed::VACUUM)
        .build()?;
    let l3 = network
        .new_link()
        .set_bandwidth(bw("100mbps")?)
        .set_length(m(60))
        .set_signal_speed(SignalSpeed::VACUUM)
        .build()?;
    // long-haul terrestrial backbone
    let l4 = network
        .new_link()
        .set_bandwidth(bw("500mbps")?)
        .set_length(m(3_300_000))
        .set_signal_speed(SignalSpeed::VACUUM)
        .build()?;
    let l5 = network
        .new_link()
        .set_bandwidth(bw("200mbps")?)
        .set_length(m(500))
        .set_signal_speed(SignalSpeed::CABLE)
        .build()?;
    // server access link
    let l6 = network
        .new_link()
        .set_bandwidth(bw("50mbps")?)
        .set_length(m(60))
        .set_signal_speed(SignalSpeed::CABLE)
        .build()?;

    let ms = Duration::from_millis;
    let us = Duration::from_micros;

    // end hosts forward at no processing cost
    let c = network.new_node().set_name("C").attach_link(l1).build();
    let _d1 = network.new_node().set_name("D1").attach_link(l5).build();
    let s = network.new_node().set_name("S").attach_link(l6).build();

    // switches
    let s1 = network
        .new_node()
        .set_name("S1")
        .set_processing_delay(ms(1))
        .attach_link(l1)
        .attach_link(l2)
        .build();
    let s2 = network
        .new_node()
        .set_name("S2")
        .set_processing_delay(ms(2))
        .attach_link(l2)
        .attach_link(l3)
        .attach_link(l4)
        .build();
    let _s3 = network
        .new_node()
        .set_name("S3")
        .set_processing_delay(us(500))
        .attach_link(l4)
        .attach_link(l5)
        .build();
    let s4 = network
        .new_node()
        .set_name("S4")
        .set_processing_delay(us(250))
        .attach_link(l3)
        .attach_link(l6)
        .build();

    Ok((network, vec![s, s4, s2, s1, c]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_consecutive_pair_is_adjacent() {
        let (network, path) = web_fetch().unwrap();

        for pair in path.windows(2) {
            assert!(network.shared_link(pair[0], pair[1]).is_ok());
        }
    }

    #[test]
    fn path_runs_from_server_to_client() {
        let (network, path) = web_fetch().unwrap();

        let names: Vec<_> = path
            .iter()
            .map(|id| network.node(*id).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["S", "S4", "S2", "S1", "C"]);
    }
}
