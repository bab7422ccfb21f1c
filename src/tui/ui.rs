use crate::core::state::App;
use crate::tui::components::{CartList, InventoryList, TitleBar};
use crate::tui::component::Component;
use crate::tui::{Panel, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

const HELP_TEXT: &str =
    "Tab panels  Up/Down select  -/+ quantity  Enter add  d delete  c checkout  q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let [inventory_area, cart_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);

    let mut title_bar = TitleBar {
        store_label: &app.store_label,
        status_message: &app.status_message,
        is_loading: app.is_loading,
    };
    title_bar.render(frame, title_area);

    let mut inventory = InventoryList {
        rows: &app.inventory,
        cursor: &mut tui.inventory_cursor,
        focused: tui.focus == Panel::Inventory,
    };
    inventory.render(frame, inventory_area);

    let mut cart = CartList {
        rows: &app.cart,
        cursor: &mut tui.cart_cursor,
        focused: tui.focus == Panel::Cart,
    };
    cart.render(frame, cart_area);

    // Bottom line: last store failure, or the key bindings
    let help = match &app.error {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(HELP_TEXT).style(Style::default().add_modifier(Modifier::DIM)),
    };
    frame.render_widget(help, help_area);
}
