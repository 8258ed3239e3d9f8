//! Spawn descriptors: which asset to instantiate and the physics overrides applied to it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Root of the content-distribution server that hosts the pre-authored assets.
pub const NUCLEUS_ASSET_ROOT_DIR: &str =
    "http://omniverse-content-production.s3-us-west-2.amazonaws.com/Assets/Isaac/2023.1.1";

/// Directory holding the simulator's stock assets.
pub const ISAAC_NUCLEUS_DIR: &str =
    "http://omniverse-content-production.s3-us-west-2.amazonaws.com/Assets/Isaac/2023.1.1/Isaac";

/// Directory holding the robot-learning sample assets (robots, scenes, materials).
pub const ISAAC_ORBIT_NUCLEUS_DIR: &str = "http://omniverse-content-production.s3-us-west-2.amazonaws.com/Assets/Isaac/2023.1.1/Isaac/Samples/Orbit";

/// Builds an asset locator of the form `<ISAAC_ORBIT_NUCLEUS_DIR>/<relative>`.
pub fn asset_path(relative: &str) -> String {
    format!(
        "{ISAAC_ORBIT_NUCLEUS_DIR}/{}",
        relative.trim_start_matches('/')
    )
}

/// How to materialize the robot body in the simulated world.
///
/// The asset file itself is owned and interpreted by the simulation engine;
/// this record only locates it and lists the property overrides to apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    /// Resource locator of the asset description.
    pub asset_path: String,

    /// Whether contact reporting is enabled on every rigid body of the asset.
    #[serde(default)]
    pub activate_contact_sensors: bool,

    /// Uniform or per-axis scale applied to the asset. `None` keeps the authored scale.
    #[serde(default)]
    pub scale: Option<Vec3>,

    #[serde(default)]
    pub rigid_props: RigidBodyProperties,

    #[serde(default)]
    pub articulation_props: ArticulationRootProperties,
}

/// Rigid-body overrides applied to every body of the spawned asset.
///
/// Every field is optional: `None` leaves the value authored in the asset untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodyProperties {
    pub disable_gravity: Option<bool>,
    /// Carry accelerations over between simulation steps.
    pub retain_accelerations: Option<bool>,
    pub linear_damping: Option<f32>,
    pub angular_damping: Option<f32>,
    /// Linear velocity cap (m/s).
    pub max_linear_velocity: Option<f32>,
    /// Angular velocity cap (deg/s).
    pub max_angular_velocity: Option<f32>,
    /// Maximum velocity used to resolve penetrations (m/s).
    pub max_depenetration_velocity: Option<f32>,
}

/// Overrides applied to the articulation root of the spawned asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticulationRootProperties {
    pub enabled_self_collisions: Option<bool>,
    /// Position iterations of the solver.
    pub solver_position_iteration_count: Option<u32>,
    /// Velocity iterations of the solver.
    pub solver_velocity_iteration_count: Option<u32>,
    /// Mass-normalized kinetic energy below which the articulation may sleep.
    pub sleep_threshold: Option<f32>,
    /// Mass-normalized kinetic energy below which the articulation may be stabilized.
    pub stabilization_threshold: Option<f32>,
}

impl RigidBodyProperties {
    /// Named optional scalars that must be non-negative when set.
    pub(crate) fn non_negative_fields(&self) -> [(&'static str, Option<f32>); 5] {
        [
            ("rigid_props.linear_damping", self.linear_damping),
            ("rigid_props.angular_damping", self.angular_damping),
            ("rigid_props.max_linear_velocity", self.max_linear_velocity),
            ("rigid_props.max_angular_velocity", self.max_angular_velocity),
            (
                "rigid_props.max_depenetration_velocity",
                self.max_depenetration_velocity,
            ),
        ]
    }
}

impl ArticulationRootProperties {
    pub(crate) fn non_negative_fields(&self) -> [(&'static str, Option<f32>); 2] {
        [
            ("articulation_props.sleep_threshold", self.sleep_threshold),
            (
                "articulation_props.stabilization_threshold",
                self.stabilization_threshold,
            ),
        ]
    }
}
