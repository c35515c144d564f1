//! skylift - episodic task environments for simulated supply drones.
//!
//! Deterministic state machines for two RL drone tasks: a supply-delivery
//! drone carrying cargo from a warehouse to a shelter through checkpoints and
//! obstacles, and a reconnaissance drone scouting for targets. Physics,
//! sensing, and policy inference stay outside the crate; a host simulation
//! loop feeds in body state, zone events, and actions, and consumes movement
//! commands and reward events.

pub mod action;
pub mod agent;
pub mod config;
pub mod delivery;
pub mod error;
pub mod flight;
pub mod observation;
pub mod policy;
pub mod recon;
pub mod reward;
pub mod telemetry;
pub mod types;

pub use action::{ActionCommand, HeuristicInput, ModeAction, MovementCommand};
pub use agent::{EpisodicAgent, StepResult};
pub use config::{DeliveryConfig, FlightConfig, ReconConfig, RewardTable, SceneLayout};
pub use delivery::{CargoLocation, CargoState, DeliveryAgent};
pub use error::ConfigError;
pub use observation::ObservationBuilder;
pub use policy::{Policy, RandomPolicy};
pub use recon::{Detection, ReconAgent};
pub use reward::{RewardEvent, RewardReason};
pub use telemetry::{AgentEvent, EventSink, MemorySink, NoopSink};
pub use types::{BodyState, FieldBounds, Vec3, Zone};

/// Identifier type used for checkpoints, targets, and scene objects.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
