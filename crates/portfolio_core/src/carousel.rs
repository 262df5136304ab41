//! Circular carousel over a fixed, non-empty sequence.

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Entering slide comes in from the right (after `next`).
    Forward,
    /// Entering slide comes in from the left (after `previous`).
    Backward,
}

impl SlideDirection {
    /// Horizontal sign of the entering slide's start offset.
    pub fn enter_sign(self) -> f32 {
        match self {
            SlideDirection::Forward => 1.0,
            SlideDirection::Backward => -1.0,
        }
    }
}

/// One-shot transition keyed by the index that became current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub key: usize,
    pub direction: SlideDirection,
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    last_direction: SlideDirection,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, ContentError> {
        if items.is_empty() {
            return Err(ContentError::EmptyCarousel);
        }
        Ok(Self {
            items,
            index: 0,
            last_direction: SlideDirection::Forward,
        })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
        self.last_direction = SlideDirection::Forward;
        tracing::trace!(index = self.index, "carousel advanced");
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.last_direction = SlideDirection::Backward;
        tracing::trace!(index = self.index, "carousel rewound");
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn transition(&self) -> SlideTransition {
        SlideTransition {
            key: self.index,
            direction: self.last_direction,
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
