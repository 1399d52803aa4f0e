// tests/navigation.rs
use glam::IVec3;
use grid_probe::{Facing, Grid, Probe, ProbeConfig, ProbeError};

fn grid6() -> Grid {
    Grid::new(6, 6, 6).unwrap()
}

#[test]
fn test_initial_state() {
    let grid = grid6();
    let probe = Probe::new(&grid, IVec3::new(2, 3, 5), Facing::North).unwrap();

    assert_eq!(probe.position(), IVec3::new(2, 3, 5));
    assert_eq!(probe.facing(), Facing::North);
    assert_eq!(probe.visited_labels(), vec!["(2,3,5)"]);
}

#[test]
fn test_move_forward_and_backward_per_facing() {
    let grid = grid6();
    let start = IVec3::new(2, 3, 2);
    let cases = [
        (Facing::North, IVec3::new(2, 4, 2), IVec3::new(2, 2, 2)),
        (Facing::East, IVec3::new(3, 3, 2), IVec3::new(1, 3, 2)),
        (Facing::South, IVec3::new(2, 2, 2), IVec3::new(2, 4, 2)),
        (Facing::West, IVec3::new(1, 3, 2), IVec3::new(3, 3, 2)),
        (Facing::Up, IVec3::new(2, 3, 3), IVec3::new(2, 3, 1)),
        (Facing::Down, IVec3::new(2, 3, 1), IVec3::new(2, 3, 3)),
    ];

    for (facing, forward, backward) in cases {
        let mut probe = Probe::new(&grid, start, facing).unwrap();
        assert!(probe.move_forward());
        assert_eq!(probe.position(), forward, "forward while {facing}");

        let mut probe = Probe::new(&grid, start, facing).unwrap();
        assert!(probe.move_backward());
        assert_eq!(probe.position(), backward, "backward while {facing}");
    }
}

#[test]
fn test_turn_tables() {
    let grid = grid6();
    let left = [
        (Facing::North, Facing::West),
        (Facing::West, Facing::South),
        (Facing::South, Facing::East),
        (Facing::East, Facing::North),
    ];
    for (from, to) in left {
        let mut probe = Probe::new(&grid, IVec3::ZERO, from).unwrap();
        probe.turn_left();
        assert_eq!(probe.facing(), to);
        probe.turn_right();
        assert_eq!(probe.facing(), from);
    }
}

#[test]
fn test_move_up_and_down_ignore_facing() {
    let grid = grid6();
    let mut probe = Probe::new(&grid, IVec3::new(2, 3, 5), Facing::North).unwrap();

    // Top layer: rising is blocked.
    assert!(!probe.move_up());
    assert_eq!(probe.position().z, 5);

    assert!(probe.move_down());
    assert_eq!(probe.position(), IVec3::new(2, 3, 4));
    assert_eq!(probe.facing(), Facing::North);
}

#[test]
fn test_start_outside_grid_is_rejected() {
    let grid = Grid::new(5, 5, 5).unwrap();
    let err = Probe::new(&grid, IVec3::new(6, 0, 0), Facing::North).unwrap_err();
    assert_eq!(err, ProbeError::StartOutOfBounds(IVec3::new(6, 0, 0)));
}

#[test]
fn test_bounds_block_movement() {
    let grid = Grid::new(5, 5, 5).unwrap();
    let mut probe = Probe::new(&grid, IVec3::ZERO, Facing::North).unwrap();

    assert!(!probe.move_backward());
    assert_eq!(probe.position(), IVec3::ZERO);
    assert_eq!(probe.visited().len(), 1);
}

#[test]
fn test_obstacle_blocks_movement() {
    let mut grid = grid6();
    grid.add_obstacle(IVec3::new(3, 3, 5)).unwrap();
    let mut probe = Probe::new(&grid, IVec3::new(2, 3, 5), Facing::East).unwrap();

    assert!(!probe.move_forward());
    assert_eq!(probe.position(), IVec3::new(2, 3, 5));
    assert_eq!(probe.visited().len(), 1);
}

#[test]
fn test_visited_path_records_every_step() {
    let grid = grid6();
    let mut probe = Probe::new(&grid, IVec3::ZERO, Facing::North).unwrap();

    probe.move_forward();
    probe.move_forward();
    probe.turn_right();
    probe.move_forward();
    // Step back onto a cell already visited.
    probe.move_backward();

    assert_eq!(
        probe.visited_labels(),
        vec!["(0,0,0)", "(0,1,0)", "(0,2,0)", "(1,2,0)", "(0,2,0)"]
    );
}

#[test]
fn test_vertical_turns_level_out() {
    let grid = grid6();
    let mut probe = Probe::new(&grid, IVec3::new(2, 3, 2), Facing::East).unwrap();

    probe.turn_up();
    assert_eq!(probe.facing(), Facing::Up);
    assert_eq!(probe.last_horizontal(), Facing::East);

    // Already up.
    probe.turn_up();
    assert_eq!(probe.facing(), Facing::Up);

    // Down from Up restores the heading rather than flipping to Down.
    probe.turn_down();
    assert_eq!(probe.facing(), Facing::East);

    probe.turn_down();
    assert_eq!(probe.facing(), Facing::Down);
    probe.turn_up();
    assert_eq!(probe.facing(), Facing::East);
}

#[test]
fn test_left_right_are_noops_while_vertical() {
    let grid = grid6();
    let mut probe = Probe::new(&grid, IVec3::new(2, 3, 2), Facing::North).unwrap();

    probe.turn_up();
    probe.turn_left();
    assert_eq!(probe.facing(), Facing::Up);
    probe.turn_right();
    assert_eq!(probe.facing(), Facing::Up);

    // The remembered heading is untouched by the ignored turns.
    probe.turn_down();
    assert_eq!(probe.facing(), Facing::North);
}

#[test]
fn test_vertical_start_levels_out_to_configured_heading() {
    let grid = grid6();

    let mut probe = Probe::new(&grid, IVec3::new(1, 1, 1), Facing::Up).unwrap();
    probe.turn_down();
    assert_eq!(probe.facing(), Facing::North);

    let config = ProbeConfig {
        level_heading: Facing::West,
    };
    let mut probe = Probe::with_config(&grid, IVec3::new(1, 1, 1), Facing::Down, &config).unwrap();
    probe.turn_up();
    assert_eq!(probe.facing(), Facing::West);
}

#[test]
fn test_vertical_level_heading_is_rejected() {
    let grid = grid6();
    let config = ProbeConfig {
        level_heading: Facing::Down,
    };
    let err = Probe::with_config(&grid, IVec3::ZERO, Facing::North, &config).unwrap_err();
    assert_eq!(err, ProbeError::VerticalLevelHeading(Facing::Down));
}
