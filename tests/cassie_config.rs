// tests/cassie_config.rs
use cassie_articulation::{
    ArticulationConfig, CASSIE_CFG, CASSIE_JOINT_NAMES, ISAAC_ORBIT_NUCLEUS_DIR, cassie_config,
};
use glam::Vec3;

const LEG_JOINTS: [&str; 6] = [
    "hip_abduction",
    "hip_rotation",
    "hip_flexion",
    "thigh_joint",
    "ankle_joint",
    "toe_joint",
];

#[test]
fn test_every_joint_is_covered_once() {
    let binding = CASSIE_CFG.bind(&CASSIE_JOINT_NAMES).unwrap();
    assert_eq!(binding.len(), 12);

    let legs: Vec<&str> = binding.group_joints("legs").collect();
    let toes: Vec<&str> = binding.group_joints("toes").collect();
    assert_eq!(legs.len(), 10, "legs drive hips, thighs and ankles");
    assert_eq!(toes, vec!["toe_joint_left", "toe_joint_right"]);
    assert!(legs.iter().all(|j| !toes.contains(j)), "groups must be disjoint");

    for joint in CASSIE_JOINT_NAMES {
        assert!(
            CASSIE_CFG.init_state.joint_pos.contains_key(joint),
            "{joint} missing from joint_pos"
        );
    }
    assert_eq!(CASSIE_CFG.init_state.joint_pos.len(), 12);
}

#[test]
fn test_value_ranges() {
    let cfg: &ArticulationConfig = &CASSIE_CFG;
    cfg.validate().unwrap();

    assert!(cfg.soft_joint_pos_limit_factor > 0.0 && cfg.soft_joint_pos_limit_factor <= 1.0);
    for group in cfg.actuators.values() {
        assert!(group.effort_limit > 0.0);
        assert!(group.velocity_limit > 0.0);
        assert!(group.stiffness.values().all(|&k| k > 0.0));
        assert!(group.damping.values().all(|&d| d > 0.0));
    }
    let props = &cfg.spawn.articulation_props;
    assert_eq!(props.solver_position_iteration_count, Some(4));
    assert_eq!(props.solver_velocity_iteration_count, Some(0));
}

#[test]
fn test_left_right_symmetry() {
    let joint_pos = &CASSIE_CFG.init_state.joint_pos;
    for joint in LEG_JOINTS {
        let left = joint_pos[&format!("{joint}_left")];
        let right = joint_pos[&format!("{joint}_right")];
        if joint == "hip_abduction" {
            assert_eq!(left, -right, "abduction mirrors across the sagittal plane");
        } else {
            assert_eq!(left, right, "{joint} should match on both sides");
        }
    }
    assert_eq!(joint_pos["hip_abduction_left"], 0.1);
    assert_eq!(joint_pos["hip_abduction_right"], -0.1);
}

#[test]
fn test_construction_is_deterministic_and_isolated() {
    assert_eq!(cassie_config(), cassie_config());
    assert_eq!(cassie_config(), *CASSIE_CFG);

    let mut copy = cassie_config();
    copy.init_state
        .joint_pos
        .insert("hip_flexion_left".to_string(), 0.0);
    copy.actuators.remove("toes");

    assert_eq!(CASSIE_CFG.init_state.joint_pos["hip_flexion_left"], 1.0);
    assert!(CASSIE_CFG.actuators.contains_key("toes"));
    assert_eq!(cassie_config(), *CASSIE_CFG);
}

#[test]
fn test_resolve_examples() {
    let ankle = CASSIE_CFG.resolve_actuator("ankle_joint_left").unwrap();
    assert_eq!(ankle.group, "legs");
    assert_eq!(ankle.stiffness, 200.0);
    assert_eq!(ankle.damping, 6.0);
    assert_eq!(ankle.effort_limit, 200.0);

    let toe = CASSIE_CFG.resolve_actuator("toe_joint_right").unwrap();
    assert_eq!(toe.group, "toes");
    assert_eq!(toe.stiffness, 20.0);
    assert_eq!(toe.damping, 1.0);
    assert_eq!(toe.effort_limit, 20.0);

    let hip = CASSIE_CFG.resolve_actuator("hip_rotation_right").unwrap();
    assert_eq!((hip.stiffness, hip.damping), (100.0, 3.0));
}

#[test]
fn test_spawn_and_reset_state() {
    assert_eq!(
        CASSIE_CFG.spawn.asset_path,
        format!("{ISAAC_ORBIT_NUCLEUS_DIR}/Robots/Agility/Cassie/cassie.usd")
    );
    assert!(CASSIE_CFG.spawn.activate_contact_sensors);
    assert_eq!(CASSIE_CFG.spawn.rigid_props.disable_gravity, Some(false));
    assert_eq!(CASSIE_CFG.init_state.position, Vec3::new(0.0, 0.0, 0.9));

    let binding = CASSIE_CFG.bind(&CASSIE_JOINT_NAMES).unwrap();
    let thigh = binding.joint("thigh_joint_right").unwrap();
    assert_eq!(thigh.default_pos, -1.8);
    assert_eq!(thigh.default_vel, 0.0);
    assert_eq!(thigh.velocity_limit, 10.0);
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| CASSIE_CFG.bind(&CASSIE_JOINT_NAMES).map(|b| b.len())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 12);
    }
}
