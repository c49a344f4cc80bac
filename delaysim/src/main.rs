//! Simulate a burst of packets fetching a web page across the scenario
//! network and print each packet's end-to-end delay, optionally broken
//! down per hop and drawn as a stacked delay chart.

mod chart;
mod scenario;

use anyhow::{Context as _, Result};
use clap::Parser;
use delaysim_core::{
    BurstSimulator, Packet, PacketIdGenerator, network::Network, node::NodeId,
    report::BurstReport, timeline::DelayKind,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// number of packets the server injects
    #[arg(long, default_value_t = 7)]
    packets: u64,

    /// packet size, in bytes
    #[arg(long, default_value_t = 1_000)]
    packet_size: u64,

    /// width of the delay chart bars, in characters
    #[arg(long, default_value_t = 64)]
    chart_width: usize,

    /// print each packet's per-hop delay breakdown
    #[arg(long)]
    breakdown: bool,

    /// log every hop computation as it happens
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let (mut network, path) = scenario::web_fetch()?;

    let generator = PacketIdGenerator::new();
    for _ in 0..args.packets {
        let packet = Packet::new(generator.generate(), args.packet_size * 8);
        network
            .push_packet(path[0], packet)
            .context("loading the burst onto the server")?;
    }

    let simulator = BurstSimulator::new(path).context("invalid path")?;
    let report = simulator
        .run(&mut network)
        .context("running the burst simulation")?;

    println!("delays over {}", route(&network, &report.path));
    println!();
    for (position, record) in report.packets.iter().enumerate() {
        println!(
            "Packet {position}: {:.3}ms",
            record.total_delay.as_secs_f64() * 1_000.0
        );
    }

    if args.breakdown {
        println!();
        print_breakdown(&network, &report);
    }

    println!();
    print!("{}", chart::render(&report, args.chart_width));

    Ok(())
}

fn node_name(network: &Network, id: NodeId) -> String {
    network
        .node(id)
        .map(|node| node.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn route(network: &Network, path: &[NodeId]) -> String {
    path.iter()
        .map(|id| node_name(network, *id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_breakdown(network: &Network, report: &BurstReport) {
    for (position, record) in report.packets.iter().enumerate() {
        println!("Packet {position}");
        for hop in &record.hops {
            let stages: Vec<_> = DelayKind::ALL
                .iter()
                .map(|kind| {
                    format!(
                        "{kind} {:.3}ms",
                        hop.delay_of(*kind).as_secs_f64() * 1_000.0
                    )
                })
                .collect();
            println!("  {}: {}", node_name(network, hop.node), stages.join(", "));
        }
    }
}
