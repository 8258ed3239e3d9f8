//! The articulation root record: spawn, reset state, actuator groups and soft limits.
//!
//! Also carries range validation and TOML loading.

use crate::actuator::ActuatorGroup;
use crate::error::{ConfigError, Result};
use crate::pattern::{compile_all, full_match};
use crate::spawn::SpawnDescriptor;
use crate::state::InitialState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The complete, engine-agnostic description of one articulated robot.
///
/// A value of this type is plain data: it is built once, read-only afterwards,
/// and can be shared by reference across any number of simulation environments.
/// Nothing here is checked against the asset until [`bind`](Self::bind) is called
/// with the asset's joint names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticulationConfig {
    /// How to instantiate the robot body.
    pub spawn: SpawnDescriptor,

    /// Pose and velocities at reset.
    #[serde(default)]
    pub init_state: InitialState,

    /// Fraction of the hard joint range treated as the soft range, in (0, 1].
    #[serde(default = "default_soft_limit_factor")]
    pub soft_joint_pos_limit_factor: f32,

    /// Actuator groups by unique name.
    pub actuators: BTreeMap<String, ActuatorGroup>,
}

fn default_soft_limit_factor() -> f32 {
    1.0
}

/// Position range of a joint (rad or m).
///
/// Bounds are always ordered; deserialized documents go through [`JointLimits::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawJointLimits")]
pub struct JointLimits {
    pub lower: f32,
    pub upper: f32,
}

#[derive(Deserialize)]
struct RawJointLimits {
    lower: f32,
    upper: f32,
}

impl From<RawJointLimits> for JointLimits {
    fn from(raw: RawJointLimits) -> Self {
        Self::new(raw.lower, raw.upper)
    }
}

impl JointLimits {
    pub fn new(lower: f32, upper: f32) -> Self {
        // Swapped bounds would give a negative range downstream.
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    pub fn midpoint(&self) -> f32 {
        0.5 * (self.lower + self.upper)
    }

    pub fn range(&self) -> f32 {
        self.upper - self.lower
    }
}

impl ArticulationConfig {
    /// Soft range for a joint with hard range `hard`: same midpoint, range scaled
    /// by `soft_joint_pos_limit_factor`.
    ///
    /// Fails if the factor lies outside (0, 1], so the soft range never exceeds the hard one.
    pub fn soft_limits(&self, hard: JointLimits) -> Result<JointLimits> {
        let factor = self.checked_soft_limit_factor()?;
        let mid = hard.midpoint();
        let half = 0.5 * hard.range() * factor;
        Ok(JointLimits::new(mid - half, mid + half))
    }

    fn checked_soft_limit_factor(&self) -> Result<f32> {
        let factor = self.soft_joint_pos_limit_factor;
        if factor.is_nan() || factor <= 0.0 || factor > 1.0 {
            return Err(out_of_range(
                "soft_joint_pos_limit_factor",
                factor,
                "0 < factor <= 1",
            ));
        }
        Ok(factor)
    }

    /// Checks value ranges and pattern syntax. Coverage against the asset's
    /// joints is checked by [`bind`](Self::bind).
    pub fn validate(&self) -> Result<()> {
        self.checked_soft_limit_factor()?;

        let rigid = self.spawn.rigid_props.non_negative_fields();
        let root = self.spawn.articulation_props.non_negative_fields();
        for (field, value) in rigid.into_iter().chain(root) {
            if let Some(v) = value
                && (v.is_nan() || v < 0.0)
            {
                return Err(out_of_range(field, v, ">= 0"));
            }
        }

        for (joint, &pos) in &self.init_state.joint_pos {
            if !pos.is_finite() {
                return Err(out_of_range(
                    &format!("init_state.joint_pos[{joint}]"),
                    pos,
                    "finite",
                ));
            }
        }
        for (pattern, &vel) in self.init_state.joint_vel.iter() {
            full_match(pattern)?;
            if !vel.is_finite() {
                return Err(out_of_range(
                    &format!("init_state.joint_vel[{pattern}]"),
                    vel,
                    "finite",
                ));
            }
        }

        for (name, group) in &self.actuators {
            compile_all(&group.joint_names_expr)?;
            check_positive(&format!("actuators.{name}.effort_limit"), group.effort_limit)?;
            check_positive(
                &format!("actuators.{name}.velocity_limit"),
                group.velocity_limit,
            )?;
            for (gain, table) in [("stiffness", &group.stiffness), ("damping", &group.damping)] {
                for (pattern, &value) in table.iter() {
                    full_match(pattern)?;
                    check_positive(&format!("actuators.{name}.{gain}[{pattern}]"), value)?;
                }
            }
        }

        Ok(())
    }

    /// Parses a TOML document. The result is not validated.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Loads and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            groups = config.actuators.len(),
            "loaded articulation config"
        );
        Ok(config)
    }
}

fn check_positive(field: &str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value, "> 0"))
    }
}

fn out_of_range(field: &str, value: f32, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        field: field.to_string(),
        value: f64::from(value),
        expected,
    }
}
