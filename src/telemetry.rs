//! Event telemetry for the task environments.
//!
//! Agents report notable transitions to an [`EventSink`] instead of writing
//! to a console. Hosts that do not care pass [`NoopSink`]; tests and replay
//! tooling use [`MemorySink`].

use std::sync::{Arc, Mutex};

use crate::types::Vec3;
use crate::Id;

/// A notable transition in an agent's episode.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    /// Episode state was reset.
    EpisodeBegin,
    /// Collided with an obstacle.
    ObstacleHit,
    /// Entered the warehouse range.
    WarehouseEntered,
    /// Left the warehouse range.
    WarehouseExited,
    /// Entered the shelter range.
    ShelterEntered,
    /// Left the shelter range.
    ShelterExited,
    /// Collected a checkpoint for the first time this episode.
    CheckpointCollected(Id),
    /// Collected the last outstanding checkpoint.
    AllCheckpointsCollected,
    /// Picked cargo up at the warehouse.
    CargoPickedUp,
    /// Released cargo; `delivered` is true only over the shelter.
    CargoReleased { delivered: bool },
    /// Left the altitude envelope.
    OutOfBounds,
    /// Detected a new reconnaissance target.
    TargetFound { target: Id, position: Vec3 },
    /// External crash signal.
    Crash { position: Vec3 },
    /// Battery depleted. Does not end the episode.
    BatteryEmpty,
}

/// Abstract sink for per-episode telemetry.
pub trait EventSink: Send {
    fn record(&mut self, event: &AgentEvent);
}

/// Sink that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&mut self, _event: &AgentEvent) {}
}

/// Sink that keeps every event in memory behind a shared handle.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the agent.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<AgentEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<AgentEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &AgentEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        handle.record(&AgentEvent::EpisodeBegin);
        handle.record(&AgentEvent::CargoPickedUp);
        assert_eq!(
            sink.events(),
            vec![AgentEvent::EpisodeBegin, AgentEvent::CargoPickedUp]
        );
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn noop_sink_discards() {
        let mut sink = NoopSink;
        sink.record(&AgentEvent::BatteryEmpty);
    }
}
