use super::*;

#[test]
fn direction_names_round_trip() {
    for dir in PadDirection::ALL {
        assert_eq!(PadDirection::parse(dir.as_str()), Some(dir));
    }
    assert_eq!(PadDirection::parse("upleft"), None);
}

#[test]
fn three_presses_up_accumulate_three_steps() {
    let mut offset = CropOffset::ZERO;
    for _ in 0..3 {
        offset = apply(offset, CropCommand::Nudge(PadDirection::Up), 50);
    }
    // directions name the window motion: up decreases y
    assert_eq!(offset, CropOffset { x: 0, y: -150 });
}

#[test]
fn diagonals_move_both_axes() {
    let offset = apply(CropOffset::ZERO, CropCommand::Nudge(PadDirection::DownRight), 10);
    assert_eq!(offset, CropOffset { x: 10, y: 10 });
    let offset = apply(offset, CropCommand::Nudge(PadDirection::UpLeft), 10);
    assert_eq!(offset, CropOffset::ZERO);
}

#[test]
fn opposite_presses_cancel() {
    let there = apply(CropOffset::ZERO, CropCommand::Nudge(PadDirection::Left), 50);
    let back = apply(there, CropCommand::Nudge(PadDirection::Right), 50);
    assert_eq!(back, CropOffset::ZERO);
}

#[test]
fn reset_recenters_regardless_of_drift() {
    let drifted = CropOffset { x: 9999, y: -123 };
    assert_eq!(apply(drifted, CropCommand::Reset, 50), CropOffset::ZERO);
}

#[test]
fn finish_does_not_move_the_window() {
    let offset = CropOffset { x: 50, y: -50 };
    assert_eq!(apply(offset, CropCommand::Finish, 50), offset);
}

#[test]
fn accumulation_is_unclamped() {
    let mut offset = CropOffset::ZERO;
    for _ in 0..1000 {
        offset = apply(offset, CropCommand::Nudge(PadDirection::Right), 50);
    }
    assert_eq!(offset.x, 50_000); // clamping happens in the fit computation
}
