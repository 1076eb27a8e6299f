use neongrid_core::*;
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn coords() -> impl Strategy<Value = Coord2> {
    (0..GRID_SIZE, 0..GRID_SIZE)
}

fn level() -> impl Strategy<Value = Level> {
    (0usize..2).prop_map(|index| load_level(index).unwrap())
}

fn state() -> impl Strategy<Value = PuzzleState> {
    (
        coords(),
        coords(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0u32..1000,
    )
        .prop_map(
            |(red_pos, blue_pos, red_phased, blue_phased, entangled, moves)| PuzzleState {
                red_pos,
                blue_pos,
                red_phased,
                blue_phased,
                entangled,
                moves,
                stage: Stage::Playing,
            },
        )
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => direction().prop_map(Command::Step),
        2 => Just(Command::ToggleEntanglement),
        1 => Just(Command::Start),
        1 => Just(Command::Continue),
    ]
}

/// Independent bounds arithmetic, without going through the crate helpers.
fn offset_by((x, y): Coord2, (dx, dy): Offset) -> Option<Coord2> {
    let x = i16::from(x) + i16::from(dx);
    let y = i16::from(y) + i16::from(dy);
    let size = i16::from(GRID_SIZE);
    if (0..size).contains(&x) && (0..size).contains(&y) {
        Some((x as Coord, y as Coord))
    } else {
        None
    }
}

fn legal(level: &Level, from: Coord2, offset: Offset, phased: bool) -> bool {
    offset_by(from, offset).is_some_and(|to| level.cell(to) != Some(Cell::Wall) || phased)
}

proptest! {
    #[test]
    fn blocked_step_is_all_or_nothing(level in level(), state in state(), direction in direction()) {
        let (dx, dy) = direction.offset();
        let blue_offset = if state.entangled { (-dx, -dy) } else { (dx, dy) };
        let red_ok = legal(&level, state.red_pos, (dx, dy), state.red_phased);
        let blue_ok = legal(&level, state.blue_pos, blue_offset, state.blue_phased);

        let (next, outcome) = advance(&state, &level, direction);

        prop_assert_eq!(try_move(&state, &level, direction).is_accepted(), red_ok && blue_ok);
        if red_ok && blue_ok {
            prop_assert_ne!(outcome, CommandOutcome::Blocked);
            prop_assert_eq!(next.moves, state.moves + 1);
        } else {
            prop_assert_eq!(outcome, CommandOutcome::Blocked);
            prop_assert_eq!(next, state);
        }
    }

    #[test]
    fn entangled_blue_mirrors_red(level in level(), state in state(), direction in direction()) {
        let state = PuzzleState { entangled: true, ..state };
        let (dx, dy) = direction.offset();

        if let Some(joint) = try_move(&state, &level, direction).accepted() {
            prop_assert_eq!(Some(joint.red_to), offset_by(state.red_pos, (dx, dy)));
            prop_assert_eq!(Some(joint.blue_to), offset_by(state.blue_pos, (-dx, -dy)));
        }
    }

    #[test]
    fn phase_toggles_once_per_landing(level in level(), state in state(), direction in direction()) {
        if let Some(joint) = try_move(&state, &level, direction).accepted() {
            let first = resolve_gates(&state, &level, joint);
            prop_assert_eq!(first, resolve_gates(&state, &level, joint));

            let mut next = state;
            first.commit(&mut next);
            let red_on_gate = level.cell(joint.red_to) == Some(Cell::PhaseGate);
            let blue_on_gate = level.cell(joint.blue_to) == Some(Cell::PhaseGate);
            prop_assert_eq!(next.red_phased, state.red_phased ^ red_on_gate);
            prop_assert_eq!(next.blue_phased, state.blue_phased ^ blue_on_gate);
        }
    }

    #[test]
    fn completion_requires_exact_goals(level in level(), state in state(), direction in direction()) {
        let (next, outcome) = advance(&state, &level, direction);

        if outcome != CommandOutcome::Blocked {
            let solved = next.red_pos == level.red_goal() && next.blue_pos == level.blue_goal();
            prop_assert_eq!(outcome == CommandOutcome::Completed, solved);
            prop_assert_eq!(next.stage == Stage::Complete, solved);
        }
    }

    #[test]
    fn move_counter_tracks_accepted_steps(commands in prop::collection::vec(command(), 0..64)) {
        let mut engine = PuzzleEngine::default();
        let mut expected = 0;

        for command in commands {
            match engine.apply(command) {
                CommandOutcome::Moved | CommandOutcome::Completed => expected += 1,
                CommandOutcome::LevelLoaded(_) => expected = 0,
                _ => {}
            }
            prop_assert_eq!(engine.state().moves, expected);

            if engine.stage().is_playing() {
                prop_assert!(engine.level().contains(engine.state().red_pos));
                prop_assert!(engine.level().contains(engine.state().blue_pos));
            }
        }
    }
}
