//! Observation encoding for the policy collaborator.
//!
//! Both tasks emit small fixed-width vectors; the dimensions are part of the
//! external interface and must match the trained policy's input layer.

use crate::types::{BodyState, Vec3};

/// Builds observation vectors for the task agents.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Delivery observation width: velocity(3) + orientation(3).
    pub const DELIVERY_DIM: usize = 6;

    /// Reconnaissance observation width: velocity(3) + last target(3).
    pub const RECON_DIM: usize = 6;

    /// Observation for the delivery drone:
    /// `[vel.x, vel.y, vel.z, rot.x, rot.y, rot.z]`.
    pub fn delivery(body: &BodyState) -> Vec<f64> {
        vec![
            body.velocity.x,
            body.velocity.y,
            body.velocity.z,
            body.orientation.x,
            body.orientation.y,
            body.orientation.z,
        ]
    }

    /// Observation for the reconnaissance drone:
    /// `[vel.x, vel.y, vel.z, target.x, target.y, target.z]`.
    ///
    /// `last_target` stays zero until the first sighting of an episode.
    pub fn recon(body: &BodyState, last_target: &Vec3) -> Vec<f64> {
        vec![
            body.velocity.x,
            body.velocity.y,
            body.velocity.z,
            last_target.x,
            last_target.y,
            last_target.z,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_observation_matches_dim() {
        let body = BodyState::default();
        assert_eq!(
            ObservationBuilder::delivery(&body).len(),
            ObservationBuilder::DELIVERY_DIM
        );
    }

    #[test]
    fn recon_observation_matches_dim() {
        let body = BodyState::default();
        assert_eq!(
            ObservationBuilder::recon(&body, &Vec3::zero()).len(),
            ObservationBuilder::RECON_DIM
        );
    }

    #[test]
    fn recon_observation_carries_target() {
        let body = BodyState::default();
        let obs = ObservationBuilder::recon(&body, &Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&obs[3..], &[1.0, 2.0, 3.0]);
    }
}
