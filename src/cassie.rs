//! Agility Robotics Cassie with a simple PD controller on the legs.
//!
//! Joint layout follows the UMich-BipedLab Cassie model: six actuated joints per
//! leg, named symmetrically with `_left` / `_right` suffixes.

use crate::actuator::ActuatorGroup;
use crate::articulation::ArticulationConfig;
use crate::pattern::PatternTable;
use crate::spawn::{ArticulationRootProperties, RigidBodyProperties, SpawnDescriptor, asset_path};
use crate::state::InitialState;
use glam::{Quat, Vec3};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Asset location relative to the sample-asset directory.
pub const CASSIE_ASSET: &str = "Robots/Agility/Cassie/cassie.usd";

/// Every actuated joint of the asset.
pub const CASSIE_JOINT_NAMES: [&str; 12] = [
    "hip_abduction_left",
    "hip_rotation_left",
    "hip_flexion_left",
    "thigh_joint_left",
    "ankle_joint_left",
    "toe_joint_left",
    "hip_abduction_right",
    "hip_rotation_right",
    "hip_flexion_right",
    "thigh_joint_right",
    "ankle_joint_right",
    "toe_joint_right",
];

/// Shared, lazily built Cassie configuration.
///
/// Read it by reference from any thread; use [`cassie_config`] for a private copy to modify.
pub static CASSIE_CFG: LazyLock<ArticulationConfig> = LazyLock::new(cassie_config);

/// Builds a fresh Cassie configuration.
pub fn cassie_config() -> ArticulationConfig {
    ArticulationConfig {
        spawn: SpawnDescriptor {
            asset_path: asset_path(CASSIE_ASSET),
            activate_contact_sensors: true,
            scale: None,
            rigid_props: RigidBodyProperties {
                disable_gravity: Some(false),
                retain_accelerations: Some(false),
                linear_damping: Some(0.0),
                angular_damping: Some(0.0),
                max_linear_velocity: Some(1000.0),
                max_angular_velocity: Some(1000.0),
                max_depenetration_velocity: Some(1.0),
            },
            articulation_props: ArticulationRootProperties {
                enabled_self_collisions: Some(true),
                solver_position_iteration_count: Some(4),
                solver_velocity_iteration_count: Some(0),
                ..Default::default()
            },
        },
        init_state: InitialState {
            position: Vec3::new(0.0, 0.0, 0.9),
            rotation: Quat::IDENTITY,
            joint_pos: BTreeMap::from(
                [
                    ("hip_abduction_left", 0.1),
                    ("hip_rotation_left", 0.0),
                    ("hip_flexion_left", 1.0),
                    ("thigh_joint_left", -1.8),
                    ("ankle_joint_left", 1.57),
                    ("toe_joint_left", -1.57),
                    ("hip_abduction_right", -0.1),
                    ("hip_rotation_right", 0.0),
                    ("hip_flexion_right", 1.0),
                    ("thigh_joint_right", -1.8),
                    ("ankle_joint_right", 1.57),
                    ("toe_joint_right", -1.57),
                ]
                .map(|(name, angle)| (name.to_string(), angle)),
            ),
            joint_vel: PatternTable::uniform(0.0),
            ..Default::default()
        },
        soft_joint_pos_limit_factor: 0.9,
        actuators: BTreeMap::from([
            (
                "legs".to_string(),
                ActuatorGroup {
                    joint_names_expr: vec!["hip_.*".into(), "thigh_.*".into(), "ankle_.*".into()],
                    effort_limit: 200.0,
                    velocity_limit: 10.0,
                    stiffness: PatternTable::new()
                        .with("hip_abduction.*", 100.0)
                        .with("hip_rotation.*", 100.0)
                        .with("hip_flexion.*", 200.0)
                        .with("thigh_joint.*", 200.0)
                        .with("ankle_joint.*", 200.0),
                    damping: PatternTable::new()
                        .with("hip_abduction.*", 3.0)
                        .with("hip_rotation.*", 3.0)
                        .with("hip_flexion.*", 6.0)
                        .with("thigh_joint.*", 6.0)
                        .with("ankle_joint.*", 6.0),
                },
            ),
            (
                "toes".to_string(),
                ActuatorGroup {
                    joint_names_expr: vec!["toe_.*".into()],
                    effort_limit: 20.0,
                    velocity_limit: 10.0,
                    stiffness: PatternTable::new().with("toe_joint.*", 20.0),
                    damping: PatternTable::new().with("toe_joint.*", 1.0),
                },
            ),
        ]),
    }
}
