pub mod board;
pub mod layout;
pub mod session;

pub use board::{
    box_edges, flanking_boxes, line_orientation, BoxCell, Dot, Line, LineKey, Orientation,
    Player, BOX_GRID_SIZE, GRID_SIZE, TOTAL_BOXES,
};
pub use layout::{
    BoardLayout, BOARD_MARGIN, BOARD_MAX_WIDTH, CANVAS_PADDING, CELL_SIZE_MIN, DOT_DIAMETER,
};
pub use session::{DragGesture, MoveOutcome, Session, Winner};
