use std::rc::Rc;

use yew::Reducible;

#[cfg(test)]
#[path = "quote_cursor_test.rs"]
mod quote_cursor_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStep {
    Prev,
    Next,
}

impl QuoteStep {
    pub fn direction(self) -> isize {
        match self {
            QuoteStep::Prev => -1,
            QuoteStep::Next => 1,
        }
    }
}

/// Which testimonial is showing. Exactly one index is active while there
/// is at least one quote; an empty carousel stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteCursor {
    index: usize,
    len: usize,
}

impl QuoteCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, i: usize) -> bool {
        !self.is_empty() && i == self.index
    }

    /// Moves by `direction` (-1 or +1) with wraparound.
    pub fn step(self, direction: isize) -> Self {
        if self.is_empty() {
            return self;
        }
        let len = self.len as isize;
        let index = (self.index as isize + direction + len).rem_euclid(len) as usize;
        Self { index, ..self }
    }
}

impl Reducible for QuoteCursor {
    type Action = QuoteStep;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.step(action.direction()))
    }
}
