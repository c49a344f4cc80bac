//! Drives a burst of packets across a multi-hop path.
//!
//! The simulation is fully synchronous over a logical clock: one packet
//! traverses the whole path to completion before the next one starts, and
//! the only state threaded between packets is, per hop, the instant the
//! outgoing link last finished transmitting — that is all a later packet
//! needs in order to queue behind an earlier one.

use crate::{
    error::{PathError, StepError},
    network::Network,
    node::NodeId,
    report::{BurstReport, HopRecord, PacketRecord},
};
use std::time::Duration;

/// Runs a full multi-packet, multi-hop simulation over a fixed path.
///
/// The path is an ordered sequence of at least two nodes; every
/// consecutive pair must share a link (checked at run time by the engine,
/// not at construction). Load the burst onto the first node of the path
/// with [`Network::push_packet`], then call [`run`](BurstSimulator::run).
///
/// ```
/// use delaysim_core::{BurstSimulator, Packet, PacketIdGenerator, network::Network};
///
/// let mut network = Network::new();
/// let wire = network.new_link().build().unwrap();
/// let a = network.new_node().attach_link(wire).build();
/// let b = network.new_node().attach_link(wire).build();
///
/// let generator = PacketIdGenerator::new();
/// network.push_packet(a, Packet::new(generator.generate(), 8_000)).unwrap();
///
/// let simulator = BurstSimulator::new(vec![a, b]).unwrap();
/// let report = simulator.run(&mut network).unwrap();
/// assert_eq!(report.packets.len(), 1);
/// ```
pub struct BurstSimulator {
    path: Vec<NodeId>,
}

impl BurstSimulator {
    /// Create a simulator for the given path.
    ///
    /// # Errors
    ///
    /// [`PathError::TooShort`] if the path has fewer than two nodes.
    pub fn new(path: Vec<NodeId>) -> Result<Self, PathError> {
        if path.len() < 2 {
            return Err(PathError::TooShort { len: path.len() });
        }
        Ok(Self { path })
    }

    /// The path this simulator drives packets over.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Number of hops in the path.
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }

    /// Run the burst currently queued at the path's source node.
    ///
    /// Packets advance in FIFO order, each with its own logical clock
    /// starting at zero at the path origin. Per hop, the most recent
    /// transmission-end instant is retained so the following packet
    /// queues for exactly the time the link is still busy. A hop whose
    /// node has no packet waiting is skipped for that packet, never
    /// treated as an error.
    ///
    /// The run ends when the source queue is empty; every delivered
    /// packet then sits in the terminal node's queue, its accumulated
    /// delay being the end-to-end value.
    ///
    /// # Errors
    ///
    /// [`StepError::LinkNotFound`] if two consecutive path nodes share no
    /// link, [`StepError::NodeNotFound`] if the path names an unknown
    /// node. Both abort the run immediately.
    pub fn run(&self, network: &mut Network) -> Result<BurstReport, StepError> {
        let source = self.path[0];
        let mut link_free_at: Vec<Option<Duration>> = vec![None; self.hops()];
        let mut packets = Vec::new();

        loop {
            let waiting = network
                .node(source)
                .ok_or(StepError::NodeNotFound { node: source })?
                .has_packets();
            if !waiting {
                break;
            }

            let mut clock = Duration::ZERO;
            let mut hops = Vec::with_capacity(self.hops());
            let mut advanced = None;

            for (hop, pair) in self.path.windows(2).enumerate() {
                let (current, next) = (pair[0], pair[1]);

                let waiting = network
                    .node(current)
                    .ok_or(StepError::NodeNotFound { node: current })?
                    .has_packets();
                if !waiting {
                    continue;
                }

                let outcome = network.advance_hop(current, next, clock, link_free_at[hop])?;

                clock = outcome.departure;
                link_free_at[hop] = Some(outcome.transmission_ends);
                advanced = Some((outcome.packet, outcome.accumulated_delay));
                hops.push(HopRecord {
                    node: current,
                    blocks: outcome.blocks,
                });
            }

            // the source had a packet, so at least the first hop ran
            let Some((packet, total_delay)) = advanced else {
                break;
            };
            packets.push(PacketRecord {
                packet,
                hops,
                total_delay,
            });
        }

        Ok(BurstReport {
            path: self.path.clone(),
            packets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        measure::{Bandwidth, Distance, SignalSpeed},
        packet::{Packet, PacketIdGenerator},
        timeline::{DelayKind, TimeBlock},
    };

    /// The web-fetch scenario: server S sends a segmented web page to
    /// client C through switches S4, S2, S1, with the 100kbps satellite
    /// link between S2 and S1 as the bottleneck.
    fn web_fetch_network() -> (Network, Vec<NodeId>) {
        let mut network = Network::new();

        let bw = |s: &str| s.parse::<Bandwidth>().unwrap();
        let m = Distance::from_metres;

        let l1 = network
            .new_link()
            .set_bandwidth(bw("100mbps"))
            .set_length(m(240))
            .set_signal_speed(SignalSpeed::CABLE)
            .build()
            .unwrap();
        let l2 = network
            .new_link()
            .set_bandwidth(bw("100kbps"))
            .set_length(m(42_000_000))
            .set_signal_speed(SignalSpeed::VACUUM)
            .build()
            .unwrap();
        let l3 = network
            .new_link()
            .set_bandwidth(bw("100mbps"))
            .set_length(m(60))
            .set_signal_speed(SignalSpeed::VACUUM)
            .build()
            .unwrap();
        let l4 = network
            .new_link()
            .set_bandwidth(bw("500mbps"))
            .set_length(m(3_300_000))
            .set_signal_speed(SignalSpeed::VACUUM)
            .build()
            .unwrap();
        let l6 = network
            .new_link()
            .set_bandwidth(bw("50mbps"))
            .set_length(m(60))
            .set_signal_speed(SignalSpeed::CABLE)
            .build()
            .unwrap();

        let ms = Duration::from_millis;
        let us = Duration::from_micros;

        let s = network.new_node().set_name("S").attach_link(l6).build();
        let s4 = network
            .new_node()
            .set_name("S4")
            .set_processing_delay(us(250))
            .attach_link(l3)
            .attach_link(l6)
            .build();
        let s2 = network
            .new_node()
            .set_name("S2")
            .set_processing_delay(ms(2))
            .attach_link(l2)
            .attach_link(l3)
            .attach_link(l4)
            .build();
        let s1 = network
            .new_node()
            .set_name("S1")
            .set_processing_delay(ms(1))
            .attach_link(l1)
            .attach_link(l2)
            .build();
        let c = network.new_node().set_name("C").attach_link(l1).build();

        (network, vec![s, s4, s2, s1, c])
    }

    fn load_burst(network: &mut Network, source: NodeId, count: usize) {
        let generator = PacketIdGenerator::new();
        for _ in 0..count {
            // 1000 byte packets
            network
                .push_packet(source, Packet::new(generator.generate(), 8_000))
                .unwrap();
        }
    }

    // ------------------------------------------------------------------
    // 1. Path validation
    // ------------------------------------------------------------------

    #[test]
    fn path_needs_two_nodes() {
        assert!(matches!(
            BurstSimulator::new(vec![]),
            Err(PathError::TooShort { len: 0 })
        ));
        assert!(matches!(
            BurstSimulator::new(vec![NodeId::ZERO]),
            Err(PathError::TooShort { len: 1 })
        ));
        assert!(BurstSimulator::new(vec![NodeId::ZERO, NodeId::ONE]).is_ok());
    }

    #[test]
    fn disconnected_path_aborts() {
        let mut network = Network::new();
        let a = network.new_node().build();
        let b = network.new_node().build();
        load_burst(&mut network, a, 1);

        let simulator = BurstSimulator::new(vec![a, b]).unwrap();
        assert!(matches!(
            simulator.run(&mut network),
            Err(StepError::LinkNotFound { .. })
        ));
    }

    #[test]
    fn empty_source_produces_empty_report() {
        let (mut network, path) = web_fetch_network();

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        assert!(report.packets.is_empty());
    }

    // ------------------------------------------------------------------
    // 2. The 7-packet scenario
    // ------------------------------------------------------------------

    #[test]
    fn all_packets_reach_the_client() {
        let (mut network, path) = web_fetch_network();
        let (source, terminal) = (path[0], path[4]);
        load_burst(&mut network, source, 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        assert_eq!(report.packets.len(), 7);
        assert!(!network.node(source).unwrap().has_packets());

        // delivered in FIFO order, accumulated delays matching the report
        let delivered: Vec<_> = network.node(terminal).unwrap().packets().collect();
        assert_eq!(delivered.len(), 7);
        for (record, packet) in report.packets.iter().zip(delivered) {
            assert_eq!(record.packet, packet.id());
            assert_eq!(record.total_delay, packet.accumulated_delay());
        }
    }

    #[test]
    fn first_packet_never_queues() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        let first = &report.packets[0];
        assert_eq!(first.hops.len(), 4);
        for hop in &first.hops {
            assert!(hop.block(DelayKind::Queuing).is_none());
        }
    }

    #[test]
    fn first_packet_end_to_end_delay() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 1);

        let simulator = BurstSimulator::new(path.clone()).unwrap();
        let report = simulator.run(&mut network).unwrap();

        // expected: sum of processing + transmission + propagation per hop
        let mut expected = Duration::ZERO;
        for pair in path.windows(2) {
            let link = network
                .link(network.shared_link(pair[0], pair[1]).unwrap())
                .unwrap();
            expected += network.node(pair[0]).unwrap().processing_delay();
            expected += link.transmission_delay(8_000);
            expected += link.propagation_delay();
        }

        assert_eq!(report.packets[0].total_delay, expected);
        // dominated by the satellite link: 80ms transmission + 140ms propagation
        assert!(report.packets[0].total_delay > Duration::from_millis(220));
    }

    #[test]
    fn later_packets_queue_behind_the_bottleneck() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        for record in &report.packets[1..] {
            // upstream of the bottleneck every link is still draining the
            // previous packet when the next one arrives
            for hop in &record.hops[..3] {
                assert!(hop.block(DelayKind::Queuing).is_some(), "expected queuing");
            }
            // past the bottleneck the spacing is wide enough that the last
            // link is always free
            assert!(record.hops[3].block(DelayKind::Queuing).is_none());
        }
    }

    #[test]
    fn queuing_covers_exactly_the_previous_transmission_overrun() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 3);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        for pair in report.packets.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            for (hop, later_hop) in later.hops.iter().enumerate() {
                let Some(queuing) = later_hop.block(DelayKind::Queuing) else {
                    continue;
                };
                let previous_transmission = earlier.hops[hop]
                    .block(DelayKind::Transmission)
                    .expect("every hop has a transmission block");
                assert_eq!(queuing.stop(), previous_transmission.stop());
            }
        }
    }

    #[test]
    fn delays_are_additive() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        for record in &report.packets {
            assert_eq!(record.blocks_total(), record.total_delay);
        }
    }

    #[test]
    fn blocks_never_run_backwards() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        for record in &report.packets {
            for hop in &record.hops {
                for pair in hop.blocks.windows(2) {
                    assert_eq!(pair[0].stop(), pair[1].start());
                }
                for block in &hop.blocks {
                    assert!(block.stop() >= block.start());
                }
            }
        }
    }

    #[test]
    fn totals_grow_by_the_bottleneck_period() {
        let (mut network, path) = web_fetch_network();
        load_burst(&mut network, path[0], 7);

        let simulator = BurstSimulator::new(path).unwrap();
        let report = simulator.run(&mut network).unwrap();

        let totals: Vec<Duration> = report.packets.iter().map(|p| p.total_delay).collect();
        for pair in totals.windows(2) {
            assert!(pair[1] > pair[0], "totals must grow with queue position");
        }

        // once the pipeline is saturated the spacing settles to a constant
        // period set by the bottleneck link
        let spacing: Vec<Duration> = totals.windows(2).map(|pair| pair[1] - pair[0]).collect();
        for pair in spacing.windows(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    // ------------------------------------------------------------------
    // 3. Re-running after a reset
    // ------------------------------------------------------------------

    #[test]
    fn rerun_after_clear_is_identical() {
        let (mut network, path) = web_fetch_network();
        let simulator = BurstSimulator::new(path.clone()).unwrap();

        load_burst(&mut network, path[0], 4);
        let first = simulator.run(&mut network).unwrap();

        network.clear_queues();
        load_burst(&mut network, path[0], 4);
        let second = simulator.run(&mut network).unwrap();

        let totals = |report: &BurstReport| -> Vec<Duration> {
            report.packets.iter().map(|p| p.total_delay).collect()
        };
        assert_eq!(totals(&first), totals(&second));
    }

    // ------------------------------------------------------------------
    // 4. Per-hop timeline sanity on a single hop
    // ------------------------------------------------------------------

    #[test]
    fn single_hop_burst_serialises_on_the_link() {
        let mut network = Network::new();
        let link = network
            .new_link()
            .set_bandwidth(Bandwidth::new(1_000_000))
            .set_length(Distance::from_metres(200))
            .set_signal_speed(SignalSpeed::CABLE)
            .build()
            .unwrap();
        let a = network.new_node().attach_link(link).build();
        let b = network.new_node().attach_link(link).build();
        load_burst(&mut network, a, 3);

        let simulator = BurstSimulator::new(vec![a, b]).unwrap();
        let report = simulator.run(&mut network).unwrap();

        // transmissions never overlap: each starts at or after the
        // previous one ended
        let transmissions: Vec<&TimeBlock> = report
            .packets
            .iter()
            .map(|p| p.hops[0].block(DelayKind::Transmission).unwrap())
            .collect();
        for pair in transmissions.windows(2) {
            assert!(pair[1].start() >= pair[0].stop());
        }
    }
}
