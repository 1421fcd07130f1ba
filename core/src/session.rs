use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::{
    box_edges, flanking_boxes, line_orientation, BoxCell, Dot, Line, LineKey, Player,
    TOTAL_BOXES,
};

/// In-progress drag, snapped to dots. Transient: never part of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    start: Option<Dot>,
    end: Option<Dot>,
}

impl DragGesture {
    pub fn begin(&mut self, dot: Dot) {
        self.start = Some(dot);
        self.end = None;
    }

    /// No-op unless a start has been recorded. Returns whether the end moved.
    pub fn update(&mut self, dot: Dot) -> bool {
        if self.start.is_none() || self.end == Some(dot) {
            return false;
        }
        self.end = Some(dot);
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn start(&self) -> Option<Dot> {
        self.start
    }

    pub fn endpoints(&self) -> Option<(Dot, Dot)> {
        Some((self.start?, self.end?))
    }

    /// Adjacency check only; duplicates are the engine's concern.
    pub fn is_valid_candidate(&self) -> bool {
        self.endpoints()
            .is_some_and(|(a, b)| line_orientation(a, b).is_some())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub boxes_completed: u32,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            boxes_completed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player(Player),
    Draw,
}

/// One in-memory game. Mutated only through `commit_move` and `restart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    current: Player,
    scores: [u32; 2],
    lines: Vec<Line>,
    committed: HashSet<LineKey>,
    boxes: Vec<BoxCell>,
    claimed: HashSet<Dot>,
    game_over: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            current: Player::One,
            scores: [0, 0],
            lines: Vec::new(),
            committed: HashSet::new(),
            boxes: Vec::new(),
            claimed: HashSet::new(),
            game_over: false,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Committed lines in draw order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn boxes(&self) -> &[BoxCell] {
        &self.boxes
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Only meaningful once the game is over.
    pub fn winner(&self) -> Option<Winner> {
        if !self.game_over {
            return None;
        }
        let [one, two] = self.scores;
        Some(if one > two {
            Winner::Player(Player::One)
        } else if two > one {
            Winner::Player(Player::Two)
        } else {
            Winner::Draw
        })
    }

    /// Validate and apply a finished drag. Invalid moves are silently
    /// rejected: no state change, no turn change.
    pub fn commit_move(&mut self, gesture: DragGesture) -> MoveOutcome {
        let Some((start, end)) = gesture.endpoints() else {
            return MoveOutcome::rejected();
        };
        if line_orientation(start, end).is_none() {
            return MoveOutcome::rejected();
        }
        let key = LineKey::new(start, end);
        if self.committed.contains(&key) {
            return MoveOutcome::rejected();
        }

        let player = self.current;
        self.lines.push(Line { key, player });
        self.committed.insert(key);

        // A single line can close both flanking boxes; both go to the
        // committing player.
        let mut completed = 0;
        for origin in flanking_boxes(key).into_iter().flatten() {
            if self.claimed.contains(&origin) {
                continue;
            }
            if box_edges(origin)
                .iter()
                .all(|edge| self.committed.contains(edge))
            {
                self.claimed.insert(origin);
                self.boxes.push(BoxCell { origin, player });
                self.scores[player.index()] += 1;
                completed += 1;
            }
        }

        if completed == 0 {
            self.current = player.opponent();
        }
        if self.boxes.len() as u32 == TOTAL_BOXES {
            self.game_over = true;
        }
        MoveOutcome {
            accepted: true,
            boxes_completed: completed,
        }
    }

    /// Wholesale reset; geometry is not part of the session and persists.
    pub fn restart(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
