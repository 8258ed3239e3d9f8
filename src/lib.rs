//! # cassie-articulation
//!
//! Engine-agnostic articulation configuration for the Agility Robotics Cassie biped.
//!
//! The crate describes *what* to spawn and *how* to drive it, and leaves the
//! simulation itself to the consumer: an [`ArticulationConfig`] names the asset
//! to load ([`SpawnDescriptor`]), the reset pose ([`InitialState`]) and the
//! actuator gain/limit tables ([`ActuatorGroup`]). Gains are keyed by joint-name
//! regular expressions held in ordered [`PatternTable`]s and resolved explicitly
//! when the record is bound to the joints the simulator reports.
//!
//! ```
//! use cassie_articulation::{CASSIE_CFG, CASSIE_JOINT_NAMES};
//!
//! let binding = CASSIE_CFG.bind(&CASSIE_JOINT_NAMES).unwrap();
//! assert_eq!(binding.joint("toe_joint_right").unwrap().group, "toes");
//! ```

pub mod actuator;
pub mod articulation;
pub mod binding;
pub mod cassie;
pub mod error;
pub mod pattern;
pub mod spawn;
pub mod state;

pub use actuator::*;
pub use articulation::*;
pub use binding::*;
pub use cassie::*;
pub use error::{ConfigError, Result};
pub use pattern::PatternTable;
pub use spawn::*;
pub use state::*;
