//! Headless event replay
//!
//! Drives a [`FormEngine`] from a JSON array of [`FormEvent`]s, the same way
//! the terminal UI drives it from key presses. Useful for scripted checks of
//! form behavior without a terminal.

use crate::engine::{FormEngine, Snapshot};
use crate::error::Result;
use crate::event::FormEvent;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parse a JSON event script
pub fn parse_events(json: &str) -> Result<Vec<FormEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON event script from disk
pub fn load_events<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<FormEvent>> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read event script from {:?}", path.as_ref()))?;
    let events = parse_events(&content).context("Failed to parse event script JSON")?;
    Ok(events)
}

/// Apply every event in order, collecting the snapshot after each one.
///
/// Stops at the first contract violation.
pub fn replay(engine: &mut FormEngine, events: Vec<FormEvent>) -> Result<Vec<Snapshot>> {
    info!("Replaying {} events", events.len());
    let mut snapshots = Vec::with_capacity(events.len());
    for (step, event) in events.into_iter().enumerate() {
        debug!("Step {}: {:?}", step, event);
        snapshots.push(engine.dispatch(event)?);
    }
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn test_replay_collects_one_snapshot_per_event() {
        let events = parse_events(
            r#"[
                {"type":"set_field","field":"name","value":"Amy"},
                {"type":"set_field","field":"email","value":"a@b.com"},
                {"type":"submit"}
            ]"#,
        )
        .expect("parse");

        let mut engine = FormEngine::new();
        let snapshots = replay(&mut engine, events).expect("replay");
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1].progress, 40);
        assert_eq!(snapshots[2].errors.len(), 3);
        assert!(snapshots[2].records.is_empty());
    }

    #[test]
    fn test_replay_stops_on_contract_violation() {
        let events = vec![FormEvent::Reset, FormEvent::Delete { index: 4 }, FormEvent::Reset];
        let mut engine = FormEngine::new();
        let err = replay(&mut engine, events).expect_err("bad index");
        assert!(matches!(err, FormError::IndexOutOfRange { index: 4, len: 0 }));
    }

    #[test]
    fn test_parse_events_rejects_garbage() {
        assert!(matches!(parse_events("{"), Err(FormError::Json(_))));
    }
}
