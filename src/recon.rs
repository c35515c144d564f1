//! The reconnaissance task: scout the field and report target sightings.
//!
//! [`ReconAgent`] is the simpler sibling of the delivery controller. An
//! external sensing collaborator (raycast, camera, whatever the host uses)
//! delivers detections through [`ReconAgent::observe_detection`]; crash and
//! battery signals arrive through [`on_crash`]/[`on_battery_empty`]. A crash
//! ends the episode; an empty battery is only reported. That asymmetry is
//! deliberate: a grounded scout with a dead battery still holds useful
//! information, a crashed one does not.
//!
//! [`on_crash`]: ReconAgent::on_crash
//! [`on_battery_empty`]: ReconAgent::on_battery_empty

use std::collections::HashSet;
use std::mem;

use crate::action::ActionCommand;
use crate::agent::{EpisodicAgent, StepResult};
use crate::config::ReconConfig;
use crate::error::ConfigError;
use crate::flight::FlightControl;
use crate::observation::ObservationBuilder;
use crate::reward::{RewardReason, StepRewards};
use crate::telemetry::{AgentEvent, EventSink, NoopSink};
use crate::types::{BodyState, Vec3};
use crate::Id;

/// A target sighting reported by the sensing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Id of the detected target object.
    pub target: Id,
    /// World position of the sighting.
    pub position: Vec3,
}

/// Episodic controller for the reconnaissance drone.
pub struct ReconAgent {
    config: ReconConfig,
    flight: FlightControl,
    seen: HashSet<Id>,
    find_count: u32,
    last_target: Vec3,
    episode_ended: bool,
    pending: StepRewards,
    sink: Box<dyn EventSink>,
}

impl ReconAgent {
    /// Creates a scout over a validated configuration.
    pub fn new(config: ReconConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, Box::new(NoopSink))
    }

    /// Creates a scout that reports events to the given sink.
    pub fn with_sink(config: ReconConfig, sink: Box<dyn EventSink>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            flight: FlightControl::new(),
            seen: HashSet::new(),
            find_count: 0,
            last_target: Vec3::zero(),
            episode_ended: false,
            pending: StepRewards::new(),
            sink,
        })
    }

    /// The pose the host should reset the rigid body to at episode start.
    pub fn spawn_body(&self) -> BodyState {
        BodyState::at(self.config.start_position)
    }

    /// Records a sighting from the sensing collaborator.
    ///
    /// The last-known target position is always updated. The find reward is
    /// only granted on the first sighting of a given target this episode, and
    /// its magnitude grows with the running find count
    /// (`find_reward × find_count`), so successive finds compound.
    pub fn observe_detection(&mut self, detection: &Detection) {
        if self.episode_ended {
            return;
        }
        self.last_target = detection.position;
        if self.seen.insert(detection.target.clone()) {
            self.find_count += 1;
            self.sink.record(&AgentEvent::TargetFound {
                target: detection.target.clone(),
                position: detection.position,
            });
            self.pending.push(
                self.config.find_reward * f64::from(self.find_count),
                RewardReason::TargetFound,
                false,
            );
        }
    }

    /// External crash signal: the episode ends without a reward delta.
    pub fn on_crash(&mut self, position: Vec3) {
        if self.episode_ended {
            return;
        }
        self.sink.record(&AgentEvent::Crash { position });
        self.pending.push(0.0, RewardReason::Crash, true);
        self.episode_ended = true;
    }

    /// External battery-empty signal: reported, but the episode continues.
    pub fn on_battery_empty(&mut self) {
        if self.episode_ended {
            return;
        }
        self.sink.record(&AgentEvent::BatteryEmpty);
    }

    /// Number of distinct targets found this episode.
    pub fn find_count(&self) -> u32 {
        self.find_count
    }

    /// Last-known target position, zero until the first sighting.
    pub fn last_target(&self) -> Vec3 {
        self.last_target
    }

    /// Task configuration.
    pub fn config(&self) -> &ReconConfig {
        &self.config
    }
}

impl EpisodicAgent for ReconAgent {
    fn begin_episode(&mut self) {
        self.flight.reset();
        self.seen.clear();
        self.find_count = 0;
        self.last_target = Vec3::zero();
        self.episode_ended = false;
        self.pending = StepRewards::new();
        self.sink.record(&AgentEvent::EpisodeBegin);
    }

    fn collect_observations(&self, body: &BodyState) -> Vec<f64> {
        ObservationBuilder::recon(body, &self.last_target)
    }

    fn step(&mut self, _body: &BodyState, action: &ActionCommand) -> StepResult {
        if self.episode_ended {
            if self.pending.is_empty() {
                return StepResult::noop();
            }
            let rewards = mem::take(&mut self.pending);
            return StepResult {
                movement: None,
                reward: rewards.into_event(),
            };
        }

        let rewards = mem::take(&mut self.pending);
        let movement = self
            .flight
            .apply(action, &self.config.flight, self.config.delta_t);

        StepResult {
            movement: Some(movement),
            reward: rewards.into_event(),
        }
    }

    fn episode_ended(&self) -> bool {
        self.episode_ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::MemorySink;

    fn make_agent() -> ReconAgent {
        let mut agent = ReconAgent::new(ReconConfig::default()).unwrap();
        agent.begin_episode();
        agent
    }

    fn hover() -> BodyState {
        BodyState::at(Vec3::new(0.0, 10.0, 0.0))
    }

    fn detection(target: &str, x: f64) -> Detection {
        Detection {
            target: target.into(),
            position: Vec3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let cfg = ReconConfig {
            find_reward: 0.0,
            ..ReconConfig::default()
        };
        assert!(ReconAgent::new(cfg).is_err());
    }

    #[test]
    fn finds_compound_across_the_episode() {
        let mut agent = make_agent();
        let mut total = 0.0;
        for (i, name) in ["shelter_a", "shelter_b", "shelter_c"].iter().enumerate() {
            agent.observe_detection(&detection(name, i as f64));
            total += agent.step(&hover(), &ActionCommand::idle()).reward.delta;
        }
        // 0.1 + 0.2 + 0.3
        assert!((total - 0.6).abs() < 1e-12);
        assert_eq!(agent.find_count(), 3);
    }

    #[test]
    fn repeat_sightings_update_position_without_reward() {
        let mut agent = make_agent();
        agent.observe_detection(&detection("shelter_a", 1.0));
        agent.step(&hover(), &ActionCommand::idle());

        agent.observe_detection(&detection("shelter_a", 7.0));
        let result = agent.step(&hover(), &ActionCommand::idle());
        assert_eq!(result.reward.delta, 0.0);
        assert_eq!(agent.find_count(), 1);
        assert_eq!(agent.last_target(), Vec3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn crash_ends_episode_without_delta() {
        let mut agent = make_agent();
        agent.on_crash(Vec3::new(3.0, 0.0, 3.0));
        assert!(agent.episode_ended());
        let result = agent.step(&hover(), &ActionCommand::idle());
        assert!(result.movement.is_none());
        assert_eq!(result.reward.delta, 0.0);
        assert!(result.reward.terminal);
        assert_eq!(result.reward.reason, RewardReason::Crash);
        assert_eq!(agent.step(&hover(), &ActionCommand::idle()), StepResult::noop());
    }

    #[test]
    fn battery_empty_does_not_end_episode() {
        let sink = MemorySink::new();
        let mut agent =
            ReconAgent::with_sink(ReconConfig::default(), Box::new(sink.clone())).unwrap();
        agent.begin_episode();
        agent.on_battery_empty();
        assert!(!agent.episode_ended());
        assert!(agent.step(&hover(), &ActionCommand::idle()).movement.is_some());
        assert!(sink.events().contains(&AgentEvent::BatteryEmpty));
    }

    #[test]
    fn detections_after_crash_are_ignored() {
        let mut agent = make_agent();
        agent.on_crash(Vec3::zero());
        agent.step(&hover(), &ActionCommand::idle());
        agent.observe_detection(&detection("shelter_a", 1.0));
        assert_eq!(agent.find_count(), 0);
        assert_eq!(agent.step(&hover(), &ActionCommand::idle()), StepResult::noop());
    }

    #[test]
    fn begin_episode_clears_scouting_state() {
        let mut agent = make_agent();
        agent.observe_detection(&detection("shelter_a", 1.0));
        agent.step(&hover(), &ActionCommand::idle());
        agent.begin_episode();
        assert_eq!(agent.find_count(), 0);
        assert_eq!(agent.last_target(), Vec3::zero());

        // Same target counts again in the new episode.
        agent.observe_detection(&detection("shelter_a", 1.0));
        let result = agent.step(&hover(), &ActionCommand::idle());
        assert!((result.reward.delta - 0.1).abs() < 1e-12);
    }

    #[test]
    fn observations_expose_velocity_and_last_target() {
        let mut agent = make_agent();
        agent.observe_detection(&detection("shelter_a", 4.0));
        let body = BodyState {
            velocity: Vec3::new(1.0, 2.0, 3.0),
            ..hover()
        };
        let obs = agent.collect_observations(&body);
        assert_eq!(obs.len(), ObservationBuilder::RECON_DIM);
        assert_eq!(&obs[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(&obs[3..], &[4.0, 0.0, 0.0]);
    }
}
