//! Position of the current chapter within the course.

use crate::util::percent;

/// Current chapter number and course length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    current: u32,
    total: u32,
}

impl Position {
    /// Creates position, clamping `current` into `1..=total`.
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    /// Counter label such as `Chapter 3 of 12`.
    pub fn label(&self) -> String {
        format!("Chapter {} of {}", self.current, self.total)
    }

    /// Position through the course as a percentage.
    pub fn percent(&self) -> f64 {
        percent(self.current as usize, self.total as usize)
    }
}
