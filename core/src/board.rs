use serde::{Deserialize, Serialize};

pub const GRID_SIZE: u32 = 10;
pub const BOX_GRID_SIZE: u32 = GRID_SIZE - 1;
pub const TOTAL_BOXES: u32 = BOX_GRID_SIZE * BOX_GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Grid intersection, `(col, row)` both in `0..GRID_SIZE`. The derived
/// lexicographic order is the total order line keys canonicalize under.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Dot {
    pub col: u32,
    pub row: u32,
}

impl Dot {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// `Some` iff the dots are grid-adjacent on exactly one axis.
pub fn line_orientation(a: Dot, b: Dot) -> Option<Orientation> {
    let dc = a.col.abs_diff(b.col);
    let dr = a.row.abs_diff(b.row);
    match (dc, dr) {
        (1, 0) => Some(Orientation::Horizontal),
        (0, 1) => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Unordered dot pair stored as (min, max) so the same edge drawn in either
/// direction hashes to one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    a: Dot,
    b: Dot,
}

impl LineKey {
    pub fn new(a: Dot, b: Dot) -> Self {
        if b < a {
            Self { a: b, b: a }
        } else {
            Self { a, b }
        }
    }

    pub fn endpoints(self) -> (Dot, Dot) {
        (self.a, self.b)
    }

    pub fn orientation(self) -> Option<Orientation> {
        line_orientation(self.a, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub key: LineKey,
    pub player: Player,
}

/// Unit cell identified by its top-left dot; owned by whoever drew the
/// closing edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCell {
    pub origin: Dot,
    pub player: Player,
}

/// Bounding edges of the box at `origin`: top, right, bottom, left.
pub fn box_edges(origin: Dot) -> [LineKey; 4] {
    let Dot { col, row } = origin;
    let tl = Dot::new(col, row);
    let tr = Dot::new(col + 1, row);
    let bl = Dot::new(col, row + 1);
    let br = Dot::new(col + 1, row + 1);
    [
        LineKey::new(tl, tr),
        LineKey::new(tr, br),
        LineKey::new(bl, br),
        LineKey::new(tl, bl),
    ]
}

/// Origins of the (at most two) boxes bounded by this line. A boundary line
/// has a box on one side only.
pub fn flanking_boxes(key: LineKey) -> [Option<Dot>; 2] {
    let (min, _) = key.endpoints();
    match key.orientation() {
        Some(Orientation::Vertical) => {
            let left = min.col.checked_sub(1).map(|col| Dot::new(col, min.row));
            let right = (min.col < BOX_GRID_SIZE).then_some(min);
            [left, right]
        }
        Some(Orientation::Horizontal) => {
            let above = min.row.checked_sub(1).map(|row| Dot::new(min.col, row));
            let below = (min.row < BOX_GRID_SIZE).then_some(min);
            [above, below]
        }
        None => [None, None],
    }
}
