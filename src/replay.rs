//! Event-script replay
//!
//! Drives a [`RulerController`] from a JSON-lines script, one
//! [`InputEvent`] per line, and writes a readout line per event. Blank lines
//! and lines starting with `#` are skipped; a line that is not UTF-8 or does
//! not parse is reported and skipped rather than aborting the run.

use std::io::{BufRead, Write};

use mapruler_calibration::{EventOutcome, InputEvent, RulerController};

/// Counters for a finished replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Events dispatched to the controller
    pub events: usize,
    /// Lines that were not UTF-8 or did not parse as an event
    pub skipped: usize,
    /// Successful calibrations
    pub calibrations: usize,
}

/// Replays every event in `input` through `controller`, writing one line per
/// event to `output`.
pub fn replay<R, W>(
    controller: &mut RulerController,
    input: R,
    mut output: W,
) -> anyhow::Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ReplaySummary::default();

    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = index + 1;

        let parsed = String::from_utf8(bytes)
            .map_err(|err| err.to_string())
            .and_then(|line| {
                let text = line.trim();
                if text.is_empty() || text.starts_with('#') {
                    return Ok(None);
                }
                serde_json::from_str::<InputEvent>(text)
                    .map(Some)
                    .map_err(|err| err.to_string())
            });

        let event = match parsed {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(reason) => {
                tracing::warn!(line = line_no, "Skipping unparsable event: {}", reason);
                writeln!(output, "{line_no}: skipped ({reason})")?;
                summary.skipped += 1;
                continue;
            }
        };

        let outcome = controller.handle_event(event);
        summary.events += 1;
        if matches!(outcome, EventOutcome::Calibrated(_)) {
            summary.calibrations += 1;
        }

        writeln!(
            output,
            "{line_no}: {} | mode {} | scale {} | distance {}",
            describe(&outcome),
            controller.mode(),
            controller.scale_label(),
            controller.distance_label(),
        )?;
    }

    tracing::debug!(
        events = summary.events,
        skipped = summary.skipped,
        "Replay finished"
    );
    Ok(summary)
}

fn describe(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Updated => "updated".to_string(),
        EventOutcome::ModeChanged(mode) => format!("mode changed to {mode}"),
        EventOutcome::Calibrated(report) => format!(
            "calibrated {} (grid {:.1} px, square {:.1} px, base {} m)",
            report.scale_factor, report.grid_size, report.square_size, report.base_scale
        ),
        EventOutcome::CalibrationFailed(err) => format!("calibration failed: {err}"),
    }
}
