//! # Inventory Panel
//!
//! Left-hand list of storefront rows, one per inventory item, each with
//! a quantity stepper. The stepper counter is local to the process: it
//! starts at 0, moves with `-`/`+`, floors at 0, and is only sent
//! anywhere when the user presses add.
//!
//! Follows the persistent state + transient wrapper pattern:
//! `ListCursor` lives in `TuiState`, `InventoryList` is created each
//! frame with borrowed rows.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::store::InventoryItem;
use crate::tui::component::Component;
use crate::tui::components::ListCursor;

pub struct InventoryList<'a> {
    pub rows: &'a [InventoryItem],
    pub cursor: &'a mut ListCursor,
    pub focused: bool,
}

impl InventoryList<'_> {
    fn border_style(&self) -> Style {
        if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for InventoryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Inventory ")
            .border_style(self.border_style());

        if self.rows.is_empty() {
            let empty = Paragraph::new("No inventory")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                ListItem::new(format!("{:<24} [-] {:>3} [+]", row.content, row.quantity))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.cursor.list_state);
    }
}
