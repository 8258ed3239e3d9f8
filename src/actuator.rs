//! Actuator group descriptors.

use crate::error::Result;
use crate::pattern::{PatternTable, compile_all};
use serde::{Deserialize, Serialize};

/// An implicit PD actuator model shared by a group of joints.
///
/// The simulation engine computes the joint torque itself from the gains;
/// `effort_limit` and `velocity_limit` saturate the result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActuatorGroup {
    /// Regular expressions selecting the joints driven by this group.
    pub joint_names_expr: Vec<String>,
    /// Maximum joint effort (N·m).
    pub effort_limit: f32,
    /// Maximum joint velocity (rad/s).
    pub velocity_limit: f32,
    /// Proportional gain per joint-name pattern.
    pub stiffness: PatternTable<f32>,
    /// Derivative gain per joint-name pattern.
    pub damping: PatternTable<f32>,
}

/// Gains resolved for one concrete joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointGains {
    pub stiffness: f32,
    pub damping: f32,
}

impl ActuatorGroup {
    /// Whether any selection expression matches the whole of `joint`.
    ///
    /// Recompiles the expressions per call; bind a full joint list with
    /// [`ArticulationConfig::bind`](crate::ArticulationConfig::bind) instead of looping.
    pub fn selects(&self, joint: &str) -> Result<bool> {
        Ok(compile_all(&self.joint_names_expr)?
            .iter()
            .any(|re| re.is_match(joint)))
    }

    /// First-match stiffness and damping for `joint`. `None` if either is missing.
    /// Compiles both gain tables per call.
    pub fn gains_for(&self, joint: &str) -> Result<Option<JointGains>> {
        let stiffness = self.stiffness.resolve(joint)?.copied();
        let damping = self.damping.resolve(joint)?.copied();
        Ok(stiffness
            .zip(damping)
            .map(|(stiffness, damping)| JointGains { stiffness, damping }))
    }
}
