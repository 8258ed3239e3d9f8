//! Initial state of the articulation at reset.

use crate::error::Result;
use crate::pattern::PatternTable;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pose and velocities applied when an environment resets the robot.
///
/// `joint_pos` is keyed by exact joint names while `joint_vel` is keyed by
/// patterns. The two lookups are deliberately kept apart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialState {
    /// World-frame position of the root (m).
    pub position: Vec3,
    /// World-frame orientation of the root.
    pub rotation: Quat,
    /// Linear velocity of the root (m/s).
    pub lin_vel: Vec3,
    /// Angular velocity of the root (rad/s).
    pub ang_vel: Vec3,
    /// Initial angle per joint (rad). Joints not listed start at 0.
    pub joint_pos: BTreeMap<String, f32>,
    /// Initial joint velocity per joint-name pattern (rad/s).
    pub joint_vel: PatternTable<f32>,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            lin_vel: Vec3::ZERO,
            ang_vel: Vec3::ZERO,
            joint_pos: BTreeMap::new(),
            joint_vel: PatternTable::uniform(0.0),
        }
    }
}

impl InitialState {
    /// Initial angle of `joint`, falling back to 0 for unlisted joints.
    pub fn default_joint_pos(&self, joint: &str) -> f32 {
        self.joint_pos.get(joint).copied().unwrap_or(0.0)
    }

    /// Initial velocity of `joint` from the first matching pattern, or 0.
    pub fn default_joint_vel(&self, joint: &str) -> Result<f32> {
        Ok(self.joint_vel.resolve(joint)?.copied().unwrap_or(0.0))
    }
}
