use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::ui::{COLOR_DIM, COLOR_HEADER};

/// A one-line section header with a left-aligned title and an optional
/// right-aligned detail column.
///
/// The widget holds nothing but the two display strings. Callers build it
/// fresh on every frame:
///
/// ```ignore
/// SectionHeader::new().left("ORDERS").right("24 total")
/// ```
///
/// Calling `left` or `right` again replaces the previous value.
#[derive(Debug, Clone, Default)]
pub struct SectionHeader {
    left: Option<String>,
    right: Option<String>,
}

impl SectionHeader {
    /// Create a header with both columns empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left column text.
    pub fn left(mut self, text: impl Into<String>) -> Self {
        self.left = Some(text.into());
        self
    }

    /// Set the right column text.
    pub fn right(mut self, text: impl Into<String>) -> Self {
        self.right = Some(text.into());
        self
    }
}

impl Widget for SectionHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;

        if let Some(left) = &self.left {
            let visible: String = left.chars().take(width).collect();
            buf.set_string(
                area.x,
                area.y,
                visible,
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            );
        }

        if let Some(right) = &self.right {
            let len = right.chars().count();
            if len <= width {
                // The right column never clips the left one; on a narrow
                // area the left column wins and the right is dropped.
                let left_len = self
                    .left
                    .as_ref()
                    .map(|l| l.chars().count().min(width))
                    .unwrap_or(0);
                let start = width - len;
                if left_len == 0 || start > left_len {
                    buf.set_string(
                        area.x + start as u16,
                        area.y,
                        right,
                        Style::default().fg(COLOR_DIM),
                    );
                }
            }
        }
    }
}
