//! ASCII rendering of a burst report.
//!
//! One horizontal bar per packet, scaled so the slowest packet fills the
//! requested width. Each character of a bar stands for a slice of
//! simulated time and is drawn with the glyph of the delay category
//! active at that instant.

use delaysim_core::{report::BurstReport, timeline::DelayKind};
use std::{fmt::Write as _, time::Duration};

fn glyph(kind: DelayKind) -> char {
    match kind {
        DelayKind::Queuing => '░',
        DelayKind::Processing => '▒',
        DelayKind::Transmission => '▓',
        DelayKind::Propagation => '█',
    }
}

/// Render every packet of the report as a stacked bar of `width`
/// characters, followed by a glyph legend.
pub fn render(report: &BurstReport, width: usize) -> String {
    let mut out = String::new();

    let Some(longest) = report.packets.iter().map(|p| p.total_delay).max() else {
        return out;
    };
    if longest.is_zero() || width == 0 {
        return out;
    }
    let scale = width as f64 / longest.as_secs_f64();

    for (position, record) in report.packets.iter().enumerate() {
        let mut bar = String::new();
        let mut cursor = 0usize;
        let mut elapsed = Duration::ZERO;

        // blocks are contiguous from t = 0, so stacking durations keeps
        // every segment boundary on the packet's own timeline
        for block in record.hops.iter().flat_map(|hop| hop.blocks.iter()) {
            elapsed += block.duration();
            let end = (elapsed.as_secs_f64() * scale).round() as usize;
            for _ in cursor..end {
                bar.push(glyph(block.kind()));
            }
            cursor = cursor.max(end);
        }

        let ms = record.total_delay.as_secs_f64() * 1_000.0;
        let _ = writeln!(out, "packet {position:>3} │{bar:<width$}│ {ms:>10.3}ms");
    }

    let legend: Vec<_> = DelayKind::ALL
        .iter()
        .map(|kind| format!("{} {kind}", glyph(*kind)))
        .collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", legend.join("   "));

    out
}
