//! One-line status bar with left and right aligned segments.

use crate::core::text::{pad_to_width, truncate_to_width, visible_width};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Render on exactly one line. The right segment wins when space runs out.
    pub fn render(&self, width: usize) -> String {
        let right_width = visible_width(&self.right);
        if right_width >= width {
            return truncate_to_width(&self.right, width);
        }

        let left_budget = width - right_width;
        let left = if self.right.is_empty() {
            truncate_to_width(&self.left, left_budget)
        } else {
            // Keep one column between the segments.
            truncate_to_width(&self.left, left_budget.saturating_sub(1))
        };
        format!("{}{}", pad_to_width(&left, left_budget), self.right)
    }
}
