use go_rules::{GoError, Stone};

use crate::common::{free, from_layout};

#[test]
fn lone_stone_liberties_by_position() {
    for size in 2..=9u8 {
        let last = size - 1;

        let mut engine = free(size);
        engine.place_stone((0, 0), Stone::Black).unwrap();
        assert_eq!(engine.liberty_count((0, 0)), Ok(2), "corner on {size}x{size}");

        let mut engine = free(size);
        engine.place_stone((last, last), Stone::White).unwrap();
        assert_eq!(engine.liberty_count((last, last)), Ok(2));

        if size >= 3 {
            let mut engine = free(size);
            engine.place_stone((1, 0), Stone::Black).unwrap();
            assert_eq!(engine.liberty_count((1, 0)), Ok(3), "edge on {size}x{size}");

            let mut engine = free(size);
            engine.place_stone((1, 1), Stone::Black).unwrap();
            assert_eq!(engine.liberty_count((1, 1)), Ok(4), "interior on {size}x{size}");
        }
    }
}

#[test]
fn diagonal_stones_do_not_connect() {
    // B - - - W
    // - - - - -
    // - - B - -
    // - - - - -
    // W - - - B
    let engine = from_layout(&["B---W", "-----", "--B--", "-----", "W---B"]);
    assert_eq!(engine.liberty_count((0, 0)), Ok(2));
    assert_eq!(engine.liberty_count((4, 0)), Ok(2));
    assert_eq!(engine.liberty_count((0, 4)), Ok(2));
    assert_eq!(engine.liberty_count((4, 4)), Ok(2));
    assert_eq!(engine.liberty_count((2, 2)), Ok(4));
}

#[test]
fn crowded_three_by_three() {
    // B - W
    // - B -
    // W W B
    let mut engine = free(3);
    engine.place_stone((0, 0), Stone::Black).unwrap();
    engine.place_stone((2, 0), Stone::White).unwrap();
    engine.place_stone((2, 2), Stone::Black).unwrap();
    engine.place_stone((0, 2), Stone::White).unwrap();
    engine.place_stone((1, 1), Stone::Black).unwrap();
    assert_eq!(engine.liberty_count((1, 1)), Ok(4));

    engine.place_stone((1, 2), Stone::White).unwrap();
    assert_eq!(engine.liberty_count((1, 2)), Ok(1));
    assert_eq!(engine.liberty_count((2, 2)), Ok(1));
    assert_eq!(engine.liberty_count((1, 1)), Ok(3));
}

#[test]
fn shared_liberties_count_once() {
    let engine = from_layout(&["WW--", "W---", "----", "----"]);
    // (1, 1) touches two stones of the group
    assert_eq!(engine.liberty_count((0, 0)), Ok(3));
    assert_eq!(engine.group((1, 0)).unwrap().len(), 3);
}

#[test]
fn empty_point_has_no_group() {
    let engine = free(5);
    assert!(matches!(
        engine.liberty_count((2, 2)),
        Err(GoError::InvalidArgument(_))
    ));
}

#[test]
fn queries_are_idempotent() {
    let engine = from_layout(&["BW-", "WB-", "---"]);
    let before = engine.to_string();
    for _ in 0..2 {
        assert_eq!(engine.liberty_count((1, 1)), Ok(2));
        assert_eq!(engine.stone_at((1, 0)), Ok(Some(Stone::White)));
    }
    assert_eq!(engine.to_string(), before);
}
