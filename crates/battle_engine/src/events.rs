//! Structured battle events and the presenter boundary.
//!
//! The resolver emits one event after every resolved action and every
//! status tick (plus encounter markers); how and whether they are rendered
//! is the presenter's business. The core never formats text.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde::Serialize;

use crate::combatant::StatusKind;
use crate::moves::ActionOutcome;

/// One structured event emitted by the resolver.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    /// The encounter began.
    Started { combatants: [String; 2] },
    /// A new round started.
    TurnStarted { number: u32 },
    /// The actor had no moves; the turn was wasted.
    NoAvailableActions { combatant: String },
    /// The actor was fully paralyzed; the turn was wasted.
    Immobilized { combatant: String },
    /// An action was resolved against the target.
    ActionResolved {
        actor: String,
        target: String,
        action: String,
        outcome: ActionOutcome,
    },
    /// The actor's status condition ticked at end of turn.
    StatusTicked {
        combatant: String,
        status: StatusKind,
        damage: u16,
        expired: bool,
    },
    /// A combatant fainted.
    Fainted { combatant: String },
    /// The encounter concluded.
    Ended { winner: String },
}

/// Presenter boundary for battle events.
pub trait EventSink {
    fn handle(&mut self, event: &BattleEvent);
}

/// Discards every event. The resolver's default.
#[derive(Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn handle(&mut self, _event: &BattleEvent) {}
}

/// Retains events for inspection or replay.
///
/// Clones share the same buffer, so a handle kept by the caller still sees
/// everything recorded after the sink was moved into the resolver.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<BattleEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<BattleEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn handle(&mut self, event: &BattleEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Writes one JSON object per event, newline-delimited.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn handle(&mut self, event: &BattleEvent) {
        // Presentation is best-effort; a failed write never fails the
        // encounter.
        if serde_json::to_writer(&mut self.writer, event).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Effectiveness;

    fn sample_event() -> BattleEvent {
        BattleEvent::ActionResolved {
            actor: "Pikachu".to_string(),
            target: "Charmander".to_string(),
            action: "Thunderbolt".to_string(),
            outcome: ActionOutcome {
                missed: false,
                damage_dealt: 45,
                healing_done: 0,
                effectiveness: Effectiveness::Neutral,
                status_applied: Some(StatusKind::Paralyzed),
            },
        }
    }

    #[test]
    fn recording_sink_shares_its_buffer_across_clones() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();

        handle.handle(&sample_event());
        handle.handle(&BattleEvent::Ended {
            winner: "Pikachu".to_string(),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], sample_event());
    }

    #[test]
    fn json_lines_sink_emits_one_object_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.handle(&sample_event());
        sink.handle(&BattleEvent::TurnStarted { number: 3 });

        let bytes = sink.into_inner();
        let lines: Vec<&str> = std::str::from_utf8(&bytes)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "action_resolved");
        assert_eq!(first["actor"], "Pikachu");
        assert_eq!(first["outcome"]["damage_dealt"], 45);
        assert_eq!(first["outcome"]["status_applied"], "Paralyzed");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "turn_started");
        assert_eq!(second["number"], 3);
    }
}
