//! The supply-delivery task: carry cargo from the warehouse to the shelter.
//!
//! [`DeliveryAgent`] is a deterministic state machine mapping (current state,
//! pre-step zone events, action command) to (new state, net reward, optional
//! movement). The host collision system delivers zone events through
//! [`DeliveryAgent::on_zone_enter`]/[`on_zone_exit`] strictly before the
//! corresponding [`step`]; rewards they produce are folded into that step's
//! net event.
//!
//! [`on_zone_exit`]: DeliveryAgent::on_zone_exit
//! [`step`]: EpisodicAgent::step

use std::collections::HashSet;
use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::{ActionCommand, ModeAction};
use crate::agent::{EpisodicAgent, StepResult};
use crate::config::{DeliveryConfig, SceneLayout};
use crate::error::ConfigError;
use crate::flight::FlightControl;
use crate::observation::ObservationBuilder;
use crate::reward::{RewardReason, StepRewards};
use crate::telemetry::{AgentEvent, EventSink, NoopSink};
use crate::types::{BodyState, Vec3, Zone};
use crate::Id;

/// Where the cargo currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CargoLocation {
    /// Resting at its home position on the warehouse.
    #[default]
    AtWarehouse,
    /// Attached to the drone.
    HeldByAgent,
    /// Released somewhere in the field.
    Dropped(Vec3),
}

/// State of the cargo object, mutated only through pickup/release actions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoState {
    pub location: CargoLocation,
    /// Whether the cargo simulates its own physics. Disabled while held so
    /// the engine does not fight the attachment.
    pub physics_enabled: bool,
}

impl CargoState {
    fn at_warehouse() -> Self {
        Self {
            location: CargoLocation::AtWarehouse,
            physics_enabled: true,
        }
    }
}

/// Episodic controller for the supply-delivery drone.
pub struct DeliveryAgent {
    config: DeliveryConfig,
    layout: SceneLayout,
    flight: FlightControl,
    cargo: CargoState,
    holding_cargo: bool,
    in_warehouse: bool,
    in_shelter: bool,
    collected: HashSet<Id>,
    episode_ended: bool,
    pending: StepRewards,
    sink: Box<dyn EventSink>,
}

impl DeliveryAgent {
    /// Creates an agent over a validated configuration and scene layout.
    pub fn new(config: DeliveryConfig, layout: SceneLayout) -> Result<Self, ConfigError> {
        Self::with_sink(config, layout, Box::new(NoopSink))
    }

    /// Creates an agent that reports events to the given sink.
    pub fn with_sink(
        config: DeliveryConfig,
        layout: SceneLayout,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        layout.validate()?;
        Ok(Self {
            config,
            layout,
            flight: FlightControl::new(),
            cargo: CargoState::at_warehouse(),
            holding_cargo: false,
            in_warehouse: false,
            in_shelter: false,
            collected: HashSet::new(),
            episode_ended: false,
            pending: StepRewards::new(),
            sink,
        })
    }

    /// The pose the host should reset the rigid body to at episode start:
    /// hovering over the platform at spawn height, level and at rest.
    pub fn spawn_body(&self) -> BodyState {
        BodyState::at(Vec3::new(
            self.layout.platform.x,
            self.config.spawn_height,
            self.layout.platform.z,
        ))
    }

    /// Handles a zone-enter event from the collision system.
    ///
    /// Must be called before the step it belongs to. Events arriving after
    /// the episode ended are ignored.
    pub fn on_zone_enter(&mut self, zone: &Zone) {
        if self.episode_ended {
            return;
        }
        match zone {
            Zone::Obstacle => {
                self.sink.record(&AgentEvent::ObstacleHit);
                self.pending
                    .push(-self.config.rewards.obstacle_penalty, RewardReason::Obstacle, true);
                self.episode_ended = true;
            }
            Zone::Warehouse => {
                self.in_warehouse = true;
                self.sink.record(&AgentEvent::WarehouseEntered);
                if !self.holding_cargo {
                    self.pending.push(
                        self.config.rewards.warehouse_approach,
                        RewardReason::WarehouseApproach,
                        false,
                    );
                }
            }
            Zone::Shelter => {
                self.in_shelter = true;
                self.sink.record(&AgentEvent::ShelterEntered);
                if self.holding_cargo {
                    self.pending.push(
                        self.config.rewards.shelter_approach,
                        RewardReason::ShelterApproach,
                        false,
                    );
                }
            }
            Zone::Checkpoint(id) => self.collect_checkpoint(id),
        }
    }

    /// Handles a zone-exit event from the collision system.
    pub fn on_zone_exit(&mut self, zone: &Zone) {
        if self.episode_ended {
            return;
        }
        match zone {
            Zone::Warehouse => {
                self.in_warehouse = false;
                self.sink.record(&AgentEvent::WarehouseExited);
            }
            Zone::Shelter => {
                self.in_shelter = false;
                self.sink.record(&AgentEvent::ShelterExited);
            }
            Zone::Obstacle | Zone::Checkpoint(_) => {}
        }
    }

    /// One-time checkpoint collection. Ids outside the registry and ids
    /// already collected this episode are ignored.
    fn collect_checkpoint(&mut self, id: &Id) {
        if !self.layout.checkpoints.contains(id) || self.collected.contains(id) {
            return;
        }
        self.collected.insert(id.clone());
        self.sink.record(&AgentEvent::CheckpointCollected(id.clone()));
        self.pending.push(
            self.config.rewards.checkpoint_bonus,
            RewardReason::Checkpoint,
            false,
        );
        if self.collected.len() == self.layout.checkpoints.len() {
            self.sink.record(&AgentEvent::AllCheckpointsCollected);
            self.pending.push(
                self.config.rewards.all_checkpoints_bonus,
                RewardReason::AllCheckpoints,
                true,
            );
            self.episode_ended = true;
        }
    }

    fn discrete_control(&mut self, body: &BodyState, mode: ModeAction, rewards: &mut StepRewards) {
        match mode {
            ModeAction::None => {}
            ModeAction::Pickup => {
                // The pickup bonus is guarded by the false→true holding
                // transition, so it is granted at most once per pickup.
                if self.in_warehouse && !self.holding_cargo {
                    self.cargo.location = CargoLocation::HeldByAgent;
                    self.cargo.physics_enabled = false;
                    self.holding_cargo = true;
                    self.sink.record(&AgentEvent::CargoPickedUp);
                    rewards.push(self.config.rewards.pickup_bonus, RewardReason::Pickup, false);
                }
            }
            ModeAction::Release => {
                let was_holding = self.holding_cargo;
                self.cargo.physics_enabled = true;
                self.holding_cargo = false;
                if was_holding && self.in_shelter {
                    self.cargo.location = CargoLocation::Dropped(body.position);
                    self.sink.record(&AgentEvent::CargoReleased { delivered: true });
                    rewards.push(self.config.rewards.delivery_bonus, RewardReason::Delivery, true);
                } else if !was_holding {
                    // Degenerate release: nothing was held. The episode ends
                    // without a penalty.
                    self.sink.record(&AgentEvent::CargoReleased { delivered: false });
                    rewards.push(0.0, RewardReason::DegenerateRelease, true);
                } else {
                    self.cargo.location = CargoLocation::Dropped(body.position);
                    self.sink.record(&AgentEvent::CargoReleased { delivered: false });
                    rewards.push(
                        -self.config.rewards.wrong_release_penalty,
                        RewardReason::WrongRelease,
                        true,
                    );
                }
                self.episode_ended = true;
            }
        }
    }

    /// Whether the drone is currently holding the cargo.
    pub fn holding_cargo(&self) -> bool {
        self.holding_cargo
    }

    /// Whether the drone is inside the warehouse range.
    pub fn in_warehouse(&self) -> bool {
        self.in_warehouse
    }

    /// Whether the drone is inside the shelter range.
    pub fn in_shelter(&self) -> bool {
        self.in_shelter
    }

    /// Number of checkpoints collected this episode.
    pub fn checkpoints_collected(&self) -> usize {
        self.collected.len()
    }

    /// Current cargo state.
    pub fn cargo(&self) -> &CargoState {
        &self.cargo
    }

    /// Scene layout the agent was constructed with.
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Task configuration.
    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }
}

impl EpisodicAgent for DeliveryAgent {
    fn begin_episode(&mut self) {
        self.flight.reset();
        self.cargo = CargoState::at_warehouse();
        self.holding_cargo = false;
        self.in_warehouse = false;
        self.in_shelter = false;
        self.collected.clear();
        self.episode_ended = false;
        self.pending = StepRewards::new();
        self.sink.record(&AgentEvent::EpisodeBegin);
    }

    fn collect_observations(&self, body: &BodyState) -> Vec<f64> {
        ObservationBuilder::delivery(body)
    }

    fn step(&mut self, body: &BodyState, action: &ActionCommand) -> StepResult {
        if self.episode_ended {
            if self.pending.is_empty() {
                // Finished episode: callers must begin_episode() first.
                return StepResult::noop();
            }
            // A pre-step zone event already ended the episode; report its
            // rewards without acting.
            let rewards = mem::take(&mut self.pending);
            return StepResult {
                movement: None,
                reward: rewards.into_event(),
            };
        }

        let mut rewards = mem::take(&mut self.pending);
        let movement = self
            .flight
            .apply(action, &self.config.flight, self.config.delta_t);

        self.discrete_control(body, action.mode(), &mut rewards);

        // Altitude envelope. A release that already ended the episode takes
        // precedence; termination stays one-way within the step.
        if !self.episode_ended
            && (body.position.y > self.config.max_altitude || body.position.y < 0.0)
        {
            self.sink.record(&AgentEvent::OutOfBounds);
            rewards.push(
                -self.config.rewards.out_of_bounds_penalty,
                RewardReason::OutOfBounds,
                true,
            );
            self.episode_ended = true;
        }

        StepResult {
            movement: Some(movement),
            reward: rewards.into_event(),
        }
    }

    fn episode_ended(&self) -> bool {
        self.episode_ended
    }
}
