use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the grid.  The
/// segments never overlap; a move that would make them overlap ends the
/// game instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first, tail last.  Never empty.
    segments: VecDeque<Position>,
}

impl Snake {
    /// Create a snake laid out as
    /// [`INITIAL_SNAKE`][consts::INITIAL_SNAKE]
    pub(crate) fn new() -> Snake {
        Snake {
            segments: VecDeque::from(consts::INITIAL_SNAKE),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.segments[0]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Iterate over every segment but the head
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().skip(1).copied()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Add a new head at `pos`, growing the snake by one segment
    pub(crate) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Drop the last segment, unless it's the only one
    pub(crate) fn pop_tail(&mut self) {
        if self.segments.len() > 1 {
            let _ = self.segments.pop_back();
        }
    }
}

impl Default for Snake {
    fn default() -> Snake {
        Snake::new()
    }
}

#[cfg(test)]
impl<const N: usize> From<[Position; N]> for Snake {
    fn from(segments: [Position; N]) -> Snake {
        assert!(N > 0, "snake must have at least one segment");
        Snake {
            segments: VecDeque::from(segments),
        }
    }
}

#[cfg(test)]
impl FromIterator<Position> for Snake {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Snake {
        let segments = iter.into_iter().collect::<VecDeque<_>>();
        assert!(!segments.is_empty(), "snake must have at least one segment");
        Snake { segments }
    }
}
