use std::sync::{Arc, Mutex};
use std::thread;

use go_rules::Stone;

use crate::common::free;

#[test]
fn one_lock_per_game() {
    let engine = Arc::new(Mutex::new(free(9)));

    let rows = [
        (0u8, Stone::Black),
        (2, Stone::White),
        (4, Stone::Black),
        (6, Stone::White),
    ];
    let handles: Vec<_> = rows
        .into_iter()
        .map(|(y, stone)| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for x in 0..9 {
                    let mut engine = engine.lock().unwrap();
                    engine.place_stone((x, y), stone).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let engine = engine.lock().unwrap();
    assert_eq!(engine.goban().count(Stone::Black), 18);
    assert_eq!(engine.goban().count(Stone::White), 18);
    assert_eq!(engine.moves().len(), 36);
}

#[test]
fn games_do_not_share_state() {
    let mut a = free(5);
    let b = free(5);
    a.place_stone((2, 2), Stone::Black).unwrap();
    assert_eq!(b.stone_at((2, 2)), Ok(None));
    assert!(b.moves().is_empty());
}
