//! # TitleBar Component
//!
//! Top status bar showing the store endpoint and the current status
//! message. Purely presentational: it receives everything as props and
//! holds no state, which keeps it trivial to test.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `store_label`: the base URL of the storefront being browsed
/// - `status_message`: transient status (e.g. "Adding apple x 2...")
/// - `is_loading`: a store operation is in flight
pub struct TitleBar<'a> {
    pub store_label: &'a str,
    pub status_message: &'a str,
    pub is_loading: bool,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = if self.status_message.is_empty() {
            format!("Trolley (store: {})", self.store_label)
        } else {
            format!("Trolley (store: {}) | {}", self.store_label, self.status_message)
        };
        if self.is_loading {
            title_text.push_str(" [busy]");
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}
