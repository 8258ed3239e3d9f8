//! Resolution of concrete joint names against an [`ArticulationConfig`].
//!
//! The simulator reports the joints of the spawned asset; [`ArticulationConfig::bind`]
//! assigns each of them to exactly one actuator group and resolves its gains,
//! limits and reset values. Configuration errors (uncovered or doubly-covered
//! joints, selection patterns that match nothing, missing gains) are rejected here.

use crate::actuator::ActuatorGroup;
use crate::articulation::ArticulationConfig;
use crate::error::{ConfigError, Result};
use crate::pattern::{CompiledTable, compile_all};
use regex::Regex;
use std::collections::BTreeSet;

/// The actuator parameters that apply to one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedActuator<'a> {
    /// Name of the owning actuator group.
    pub group: &'a str,
    pub stiffness: f32,
    pub damping: f32,
    pub effort_limit: f32,
    pub velocity_limit: f32,
}

/// Everything the runtime needs to drive and reset one joint.
#[derive(Clone, Debug, PartialEq)]
pub struct JointBinding {
    pub name: String,
    pub group: String,
    pub stiffness: f32,
    pub damping: f32,
    pub effort_limit: f32,
    pub velocity_limit: f32,
    /// Reset angle (rad).
    pub default_pos: f32,
    /// Reset velocity (rad/s).
    pub default_vel: f32,
}

/// Per-joint bindings, in the order the joint names were supplied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticulationBinding {
    pub joints: Vec<JointBinding>,
}

impl ArticulationBinding {
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn joint(&self, name: &str) -> Option<&JointBinding> {
        self.joints.iter().find(|j| j.name == name)
    }

    /// Names of the joints driven by `group`, in binding order.
    pub fn group_joints<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.joints
            .iter()
            .filter(move |j| j.group == group)
            .map(|j| j.name.as_str())
    }
}

struct CompiledGroup<'a> {
    name: &'a str,
    group: &'a ActuatorGroup,
    selectors: Vec<Regex>,
    stiffness: CompiledTable<'a, f32>,
    damping: CompiledTable<'a, f32>,
}

impl<'a> CompiledGroup<'a> {
    fn new(name: &'a str, group: &'a ActuatorGroup) -> Result<Self> {
        Ok(Self {
            name,
            group,
            selectors: compile_all(&group.joint_names_expr)?,
            stiffness: group.stiffness.compile()?,
            damping: group.damping.compile()?,
        })
    }

    fn selects(&self, joint: &str) -> bool {
        self.selectors.iter().any(|re| re.is_match(joint))
    }

    fn resolve(&self, joint: &str) -> Result<ResolvedActuator<'a>> {
        let missing = |gain| ConfigError::MissingGain {
            group: self.name.to_string(),
            joint: joint.to_string(),
            gain,
        };
        Ok(ResolvedActuator {
            group: self.name,
            stiffness: *self.stiffness.resolve(joint).ok_or_else(|| missing("stiffness"))?,
            damping: *self.damping.resolve(joint).ok_or_else(|| missing("damping"))?,
            effort_limit: self.group.effort_limit,
            velocity_limit: self.group.velocity_limit,
        })
    }
}

impl ArticulationConfig {
    fn compiled_groups(&self) -> Result<Vec<CompiledGroup<'_>>> {
        self.actuators
            .iter()
            .map(|(name, group)| CompiledGroup::new(name, group))
            .collect()
    }

    /// Actuator parameters for `joint`, taken from the first group (in group-name
    /// order) that selects it. Gains are resolved first-match within the group.
    ///
    /// Compiles every group's patterns on each call; use [`bind`](Self::bind) to
    /// resolve a whole joint list at once.
    pub fn resolve_actuator(&self, joint: &str) -> Result<ResolvedActuator<'_>> {
        for group in self.compiled_groups()? {
            if group.selects(joint) {
                return group.resolve(joint);
            }
        }
        Err(ConfigError::UnactuatedJoint(joint.to_string()))
    }

    /// Binds the record to the joints of a spawned asset.
    ///
    /// Joint names must be unique. Every joint must be selected by exactly one
    /// actuator group, every selection expression must match at least one joint,
    /// and every `init_state.joint_pos` key must name an existing joint. Gain
    /// patterns that select none of their group's joints are only logged.
    pub fn bind<S: AsRef<str>>(&self, joint_names: &[S]) -> Result<ArticulationBinding> {
        let mut seen = BTreeSet::new();
        if let Some(repeated) = joint_names
            .iter()
            .map(|n| n.as_ref())
            .find(|n| !seen.insert(*n))
        {
            return Err(ConfigError::DuplicateJoint(repeated.to_string()));
        }

        let groups = self.compiled_groups()?;

        for group in &groups {
            for (expr, re) in group.group.joint_names_expr.iter().zip(&group.selectors) {
                if !joint_names.iter().any(|n| re.is_match(n.as_ref())) {
                    return Err(ConfigError::UnmatchedPattern {
                        group: group.name.to_string(),
                        pattern: expr.clone(),
                    });
                }
            }
        }

        if let Some(unknown) = self
            .init_state
            .joint_pos
            .keys()
            .find(|key| !joint_names.iter().any(|n| n.as_ref() == key.as_str()))
        {
            return Err(ConfigError::UnknownJoint(unknown.clone()));
        }

        let joint_vel = self.init_state.joint_vel.compile()?;
        let mut joints = Vec::with_capacity(joint_names.len());

        for name in joint_names.iter().map(|n| n.as_ref()) {
            let mut owner: Option<&CompiledGroup<'_>> = None;
            for group in &groups {
                if !group.selects(name) {
                    continue;
                }
                if let Some(first) = owner {
                    return Err(ConfigError::DuplicateActuator {
                        joint: name.to_string(),
                        first: first.name.to_string(),
                        second: group.name.to_string(),
                    });
                }
                owner = Some(group);
            }
            let owner = owner.ok_or_else(|| ConfigError::UnactuatedJoint(name.to_string()))?;
            let resolved = owner.resolve(name)?;

            joints.push(JointBinding {
                name: name.to_string(),
                group: resolved.group.to_string(),
                stiffness: resolved.stiffness,
                damping: resolved.damping,
                effort_limit: resolved.effort_limit,
                velocity_limit: resolved.velocity_limit,
                default_pos: self.init_state.default_joint_pos(name),
                default_vel: joint_vel.resolve(name).copied().unwrap_or(0.0),
            });
        }

        let binding = ArticulationBinding { joints };
        for group in &groups {
            let members: Vec<&str> = binding.group_joints(group.name).collect();
            for (gain, table) in [("stiffness", &group.stiffness), ("damping", &group.damping)] {
                for pattern in table.unused(&members) {
                    tracing::warn!(
                        group = group.name,
                        gain,
                        pattern,
                        "gain pattern matches no joint of its group"
                    );
                }
            }
        }

        tracing::debug!(
            joints = binding.len(),
            groups = groups.len(),
            "bound articulation config"
        );
        Ok(binding)
    }
}
