use super::board::Point;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are in board pixels.  The snake always has a head; the body
/// may overlap itself.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Point,

    /// The positions of the rest of the snake's segments, from just behind
    /// the head to the tip of the tail
    pub(super) body: VecDeque<Point>,
}

impl Snake {
    /// Create a new snake consisting of just a head at `head`
    pub(crate) fn new(head: Point) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        self.head
    }

    /// Return the number of segments in the snake, including the head
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Iterate over the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Move the head to `head`.  Unless `grow` is true, the tip of the tail
    /// is dropped so that the snake's length stays the same.
    pub(crate) fn advance(&mut self, head: Point, grow: bool) {
        self.body.push_front(self.head);
        self.head = head;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}
