//! # Cart Panel
//!
//! Right-hand list mirroring the remote cart, one row per entry showing
//! content and quantity. The selected entry can be deleted; checkout
//! empties the whole panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::store::CartItem;
use crate::tui::component::Component;
use crate::tui::components::ListCursor;

pub struct CartList<'a> {
    pub rows: &'a [CartItem],
    pub cursor: &'a mut ListCursor,
    pub focused: bool,
}

impl CartList<'_> {
    fn border_style(&self) -> Style {
        if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn title(&self) -> String {
        let units: u32 = self.rows.iter().map(|row| row.quantity).sum();
        format!(" Cart ({units}) ")
    }
}

impl Component for CartList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.title())
            .border_style(self.border_style());

        if self.rows.is_empty() {
            let empty = Paragraph::new("Cart is empty")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(format!("{} x {}", row.content, row.quantity)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.cursor.list_state);
    }
}
