use go_rules::{Engine, Rules, Stone};

use crate::common::{assert_no_dead_groups, init_tracing};

fn random_game(seed: u64, size: u8, rules: Rules, turns: usize) {
    init_tracing();
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut engine = Engine::with_rules(size, rules).unwrap();

    for _ in 0..turns {
        let stone = if rules.enforces_turns() || rng.bool() {
            engine.to_play()
        } else {
            engine.to_play().opp()
        };

        if rng.u8(0..20) == 0 {
            engine.pass(stone).unwrap();
            assert!(engine.ko().is_none());
            continue;
        }

        let point = (rng.u8(0..size), rng.u8(0..size));
        let before = engine.board().to_vec();
        let legal = engine.is_legal(point, stone);

        match engine.place_stone(point, stone) {
            Ok(placement) => {
                assert!(legal, "seed {seed}: is_legal disagreed at {point:?}");
                assert_eq!(engine.stone_at(point), Ok(Some(stone)));
                for p in &placement.captured {
                    assert_eq!(engine.stone_at(*p), Ok(None));
                }
                if let Some(ko) = placement.ko {
                    assert_eq!(placement.captured, vec![ko.pos]);
                    assert!(!engine.is_legal(ko.pos, ko.illegal));
                }
                assert_no_dead_groups(&engine);
            }
            Err(_) => {
                assert!(!legal, "seed {seed}: is_legal disagreed at {point:?}");
                assert_eq!(engine.board(), before.as_slice());
            }
        }
    }
}

#[test]
fn alternating_games_never_leave_dead_groups() {
    for seed in 0..8 {
        random_game(seed, 5, Rules::alternating(), 400);
    }
}

#[test]
fn free_games_never_leave_dead_groups() {
    for seed in 100..108 {
        random_game(seed, 7, Rules::default(), 500);
    }
}

#[test]
fn small_boards() {
    for size in 1..=3 {
        random_game(u64::from(size), size, Rules::default(), 100);
    }
}

#[test]
fn tiny_board_rejects_everything_but_passes() {
    let mut engine = Engine::new(1).unwrap();
    assert!(!engine.is_legal((0, 0), Stone::Black));
    assert!(!engine.is_legal((0, 0), Stone::White));
    engine.pass(Stone::Black).unwrap();
    assert_eq!(engine.moves().len(), 1);
}
