use tentori_core::{
    BoardLayout, Dot, BOARD_MARGIN, BOARD_MAX_WIDTH, CANVAS_PADDING, CELL_SIZE_MIN,
    DOT_DIAMETER, GRID_SIZE,
};

#[test]
fn cell_size_follows_container_width() {
    // 482 - 32 margin = 450 usable, 450 / 9 = 50.
    let layout = BoardLayout::from_container_width(482.0);
    assert_eq!(layout.cell_size, 50.0);
    assert_eq!(
        layout.canvas_size,
        9.0 * 50.0 + DOT_DIAMETER + CANVAS_PADDING * 2.0
    );
}

#[test]
fn wide_containers_clamp_to_max_board_width() {
    let layout = BoardLayout::from_container_width(10_000.0);
    let expected = (BOARD_MAX_WIDTH / (GRID_SIZE - 1) as f64).floor();
    assert_eq!(layout.cell_size, expected);
}

#[test]
fn fractional_cell_sizes_round_down() {
    // 400 - 32 = 368 usable, 368 / 9 = 40.88… -> 40.
    let layout = BoardLayout::from_container_width(400.0);
    assert_eq!(layout.cell_size, 40.0);
}

#[test]
fn degenerate_widths_clamp_to_minimum_cell_size() {
    for width in [0.0, -250.0, BOARD_MARGIN, 50.0] {
        let layout = BoardLayout::from_container_width(width);
        assert_eq!(layout.cell_size, CELL_SIZE_MIN);
        assert!(layout.canvas_size > 0.0);
    }
}

#[test]
fn recomputation_is_idempotent() {
    let first = BoardLayout::from_container_width(375.0);
    let second = BoardLayout::from_container_width(375.0);
    assert_eq!(first, second);
}

#[test]
fn snapping_rounds_to_the_nearest_dot() {
    let layout = BoardLayout::from_container_width(482.0);
    let (cx, cy) = layout.dot_px(Dot::new(3, 7));
    assert_eq!(layout.nearest_dot(cx, cy), Dot::new(3, 7));
    // Just under halfway stays, past halfway moves on.
    assert_eq!(
        layout.nearest_dot(cx + layout.cell_size * 0.49, cy),
        Dot::new(3, 7)
    );
    assert_eq!(
        layout.nearest_dot(cx + layout.cell_size * 0.51, cy),
        Dot::new(4, 7)
    );
}

#[test]
fn snapping_clamps_to_the_grid() {
    let layout = BoardLayout::from_container_width(482.0);
    assert_eq!(layout.nearest_dot(-100.0, -100.0), Dot::new(0, 0));
    assert_eq!(
        layout.nearest_dot(1.0e6, 1.0e6),
        Dot::new(GRID_SIZE - 1, GRID_SIZE - 1)
    );
}
