//! JSON-lines event replay against an [`Engine`].

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::BufRead;

use pagebuilder::engine::{Action, Engine};
use pagebuilder::input::Event;

use crate::CliError;

/// Counters reported after a replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub skipped: usize,
    pub rejected_drops: usize,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_event_line(line: &str, line_no: usize) -> Result<Option<Event>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| CliError::Json { line: line_no, source })
}

/// Feed every event in `reader` to `engine`, passing each resulting action
/// to `on_action`.
pub fn replay<R: BufRead>(
    reader: R,
    engine: &mut Engine,
    mut on_action: impl FnMut(&Action) -> Result<(), CliError>,
) -> Result<ReplayStats, CliError> {
    let mut stats = ReplayStats::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(event) = parse_event_line(&line, idx + 1)? else {
            stats.skipped = stats.skipped.saturating_add(1);
            continue;
        };
        tracing::trace!(line = idx + 1, ?event, "replaying event");
        for action in engine.handle(event) {
            if matches!(action, Action::DropRejected { .. }) {
                stats.rejected_drops = stats.rejected_drops.saturating_add(1);
            }
            on_action(&action)?;
        }
        stats.events = stats.events.saturating_add(1);
    }
    Ok(stats)
}
