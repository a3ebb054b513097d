use super::*;
use crate::core::error::EngineError;
use crate::domain::direction::{DIR_E, DIR_NE, DIR_NW, DIR_SE, DIR_SW, DIR_W};

/// Assert that every cell except the listed ones is empty
fn assert_only(core: &LatticeCore, expected: &[(i32, i32, DirMask)]) {
    for row in 0..core.rows() as i32 {
        for col in 0..core.cols() as i32 {
            let want = expected
                .iter()
                .find(|(r, c, _)| (*r, *c) == (row, col))
                .map_or(0, |(_, _, mask)| *mask);
            assert_eq!(
                core.occupancy(row, col).expect("in bounds"),
                want,
                "cell ({row}, {col})"
            );
        }
    }
}

#[test]
fn propagation_moves_an_east_particle_from_an_odd_column() {
    let mut core = LatticeCore::new(3, 3);
    core.set_occupancy(1, 1, DIR_E).expect("in bounds");

    core.step();

    assert_only(&core, &[(1, 2, DIR_E)]);
}

#[test]
fn reflection_bounces_off_an_obstacle() {
    let mut core = LatticeCore::new(3, 3);
    core.set_occupancy(1, 1, DIR_E).expect("in bounds");
    assert!(core.toggle_obstacle(1, 2).expect("in bounds"));

    core.step();

    // The particle reverses heading in place; the obstacle holds nothing.
    assert_only(&core, &[(1, 1, DIR_W)]);
    assert_eq!(core.occupancy(1, 2).expect("in bounds"), 0);
}

#[test]
fn reflection_bounces_off_the_grid_edge() {
    let mut core = LatticeCore::new(3, 3);
    core.set_occupancy(1, 2, DIR_E).expect("in bounds");

    core.step();

    assert_only(&core, &[(1, 2, DIR_W)]);
}

#[test]
fn sources_inject_the_downstream_pair_each_tick() {
    let mut core = LatticeCore::new(3, 3);
    assert!(core.toggle_source(1, 1).expect("in bounds"));

    core.step();

    // Column 1 is odd: SE lands in (2,2), SW in (2,1); the source cell
    // itself is drained by propagation.
    assert_only(&core, &[(2, 2, DIR_SE), (2, 1, DIR_SW)]);
    assert_eq!(core.particle_count(), 2);
}

#[test]
fn sources_emit_independently_of_current_occupancy() {
    let mut core = LatticeCore::new(5, 5);
    core.toggle_source(1, 1).expect("in bounds");

    core.step();
    core.step();

    // Two fresh particles per tick, none merged on this geometry.
    assert_eq!(core.particle_count(), 4);
}

#[test]
fn collision_rewrites_a_ruled_state_before_propagation() {
    // 21 = E|SW|NW collides into 42 = SE|W|NE, which then propagates
    // from the even column 2: SE->(3,2), W->(2,1), NE->(1,2).
    let mut core = LatticeCore::new(5, 5);
    core.set_occupancy(2, 2, 21).expect("in bounds");

    core.step();

    assert_only(&core, &[(3, 2, DIR_SE), (2, 1, DIR_W), (1, 2, DIR_NE)]);
}

#[test]
fn unruled_states_pass_through_collision() {
    // E|W (state 9) has no rule in the shipped set; both bits just move.
    let mut core = LatticeCore::new(3, 5);
    core.set_occupancy(1, 2, DIR_E | DIR_W).expect("in bounds");

    core.step();

    assert_only(&core, &[(1, 3, DIR_E), (1, 1, DIR_W)]);
}

#[test]
fn east_west_traffic_is_conserved_across_many_ticks() {
    let mut core = LatticeCore::new(3, 5);
    core.set_occupancy(0, 0, DIR_E).expect("in bounds");
    core.set_occupancy(1, 2, DIR_E).expect("in bounds");
    core.set_occupancy(2, 4, DIR_W).expect("in bounds");
    core.set_occupancy(1, 0, DIR_W).expect("in bounds");
    assert_eq!(core.particle_count(), 4);

    for _ in 0..32 {
        core.step();
        assert_eq!(core.particle_count(), 4);
    }
}

#[test]
fn conservation_holds_with_an_interior_obstacle_wall() {
    let mut core = LatticeCore::new(3, 6);
    for row in 0..3 {
        core.toggle_obstacle(row, 4).expect("in bounds");
    }
    core.set_occupancy(1, 0, DIR_E).expect("in bounds");

    for _ in 0..16 {
        core.step();
        assert_eq!(core.particle_count(), 1);
        // The wall never captures the particle
        for row in 0..3 {
            assert_eq!(core.occupancy(row, 4).expect("in bounds"), 0);
        }
    }
}

#[test]
fn step_sequences_are_deterministic() {
    let build = || {
        let mut core = LatticeCore::new(8, 8);
        core.toggle_source(2, 3).expect("in bounds");
        core.toggle_obstacle(5, 5).expect("in bounds");
        core.set_occupancy(0, 0, DIR_E | DIR_SE).expect("in bounds");
        core.set_occupancy(7, 7, DIR_NE).expect("in bounds");
        core
    };

    let mut a = build();
    let mut b = build();
    for tick in 0..50 {
        a.step();
        b.step();
        assert_eq!(a.grid().occupancy, b.grid().occupancy, "tick {tick}");
    }
}

#[test]
fn clear_resets_cells_flags_and_frame() {
    let mut core = LatticeCore::new(4, 4);
    core.toggle_source(0, 0).expect("in bounds");
    core.toggle_obstacle(3, 3).expect("in bounds");
    core.set_occupancy(1, 1, DIR_SW).expect("in bounds");
    core.step();
    core.step();
    assert!(core.frame() > 0);

    core.clear();

    assert_eq!(core.frame(), 0);
    assert_eq!(core.particle_count(), 0);
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(core.occupancy(row, col).expect("in bounds"), 0);
            assert!(!core.is_obstacle(row, col).expect("in bounds"));
            assert!(!core.is_source(row, col).expect("in bounds"));
        }
    }

    // Clearing an already-empty session is a no-op
    core.clear();
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn toggling_an_obstacle_onto_particles_swallows_them() {
    let mut core = LatticeCore::new(3, 3);
    core.set_occupancy(1, 1, DIR_E | DIR_W).expect("in bounds");

    assert!(core.toggle_obstacle(1, 1).expect("in bounds"));
    assert_eq!(core.occupancy(1, 1).expect("in bounds"), 0);

    // Toggling back off does not resurrect them
    assert!(!core.toggle_obstacle(1, 1).expect("in bounds"));
    assert_eq!(core.occupancy(1, 1).expect("in bounds"), 0);
}

#[test]
fn seeding_an_obstacle_cell_is_ignored() {
    let mut core = LatticeCore::new(3, 3);
    core.toggle_obstacle(1, 1).expect("in bounds");

    core.set_occupancy(1, 1, DIR_E).expect("in bounds");

    assert_eq!(core.occupancy(1, 1).expect("in bounds"), 0);
}

#[test]
fn out_of_bounds_operations_are_rejected_without_mutation() {
    let mut core = LatticeCore::new(3, 3);
    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (100, 100)] {
        assert!(matches!(
            core.occupancy(row, col),
            Err(EngineError::InvalidCoordinate { .. })
        ));
        assert!(core.toggle_obstacle(row, col).is_err());
        assert!(core.toggle_source(row, col).is_err());
        assert!(core.set_occupancy(row, col, DIR_E).is_err());
    }
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.frame(), 0);
}

#[test]
fn obstacle_cells_stay_empty_next_to_a_source() {
    let mut core = LatticeCore::new(4, 4);
    core.toggle_source(1, 1).expect("in bounds");
    core.toggle_obstacle(2, 2).expect("in bounds");
    core.toggle_obstacle(2, 1).expect("in bounds");

    for _ in 0..8 {
        core.step();
        assert_eq!(core.occupancy(2, 2).expect("in bounds"), 0);
        assert_eq!(core.occupancy(2, 1).expect("in bounds"), 0);
    }
}

#[test]
fn a_source_that_is_also_an_obstacle_emits_nothing() {
    let mut core = LatticeCore::new(3, 3);
    core.toggle_source(1, 1).expect("in bounds");
    core.toggle_obstacle(1, 1).expect("in bounds");

    core.step();
    core.step();

    assert_eq!(core.particle_count(), 0);
}

#[test]
fn loading_a_bad_rule_bundle_keeps_the_current_table() {
    let mut core = LatticeCore::new(5, 5);
    assert!(core.load_collision_rules_json("{ not json").is_err());

    // The default table still applies: state 21 collides into 42 and the
    // swapped bits propagate, not the original ones.
    core.set_occupancy(2, 2, 21).expect("in bounds");
    core.step();
    assert_only(&core, &[(3, 2, DIR_SE), (2, 1, DIR_W), (1, 2, DIR_NE)]);
}

#[test]
fn loading_an_identity_rule_bundle_disables_collisions() {
    let mut core = LatticeCore::new(5, 5);
    core.load_collision_rules_json(r#"{ "format_version": 1, "pairs": [] }"#)
        .expect("empty rule set is valid");

    // With no rules, 21 = E|SW|NW propagates unchanged from even column 2:
    // E->(2,3), SW->(3,1), NW->(1,1).
    core.set_occupancy(2, 2, 21).expect("in bounds");
    core.step();

    assert_only(&core, &[(2, 3, DIR_E), (3, 1, DIR_SW), (1, 1, DIR_NW)]);
}
