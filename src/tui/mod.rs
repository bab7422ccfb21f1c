//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! core knows nothing about how it is displayed.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something happened: a key press or
//! an action arriving from a background store task. Between events it
//! sleeps in the crossterm poll, so an idle session costs nothing.

mod component;
mod components;
mod event;
mod ui;

use log::debug;
use std::sync::Arc;
use std::sync::mpsc;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::Controller;
use crate::core::state::App;
use crate::store::{HttpStore, RemoteStore};
use crate::tui::components::ListCursor;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which panel owns the cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Inventory,
    Cart,
}

impl Panel {
    pub fn next(self) -> Panel {
        match self {
            Panel::Inventory => Panel::Cart,
            Panel::Cart => Panel::Inventory,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Panel,
    pub inventory_cursor: ListCursor,
    pub cart_cursor: ListCursor,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Panel::Inventory,
            inventory_cursor: ListCursor::new(),
            cart_cursor: ListCursor::new(),
        }
    }

    /// Re-fits both cursors after the lists changed length.
    pub fn clamp(&mut self, app: &App) {
        self.inventory_cursor.clamp(app.inventory.len());
        self.cart_cursor.clamp(app.cart.len());
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store: Arc<dyn RemoteStore> = Arc::new(HttpStore::new(config.base_url.clone()));

    let mut app = App::new(config.base_url);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background store tasks
    let (tx, rx) = mpsc::channel();
    let controller = Controller::new(store, tx);
    let _ = controller.init();

    let mut needs_redraw = true;
    let mut should_quit = false;

    loop {
        tui.clamp(&app);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(150));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(event, &app, &mut tui) {
                let effect = update(&mut app, action);
                dispatch_effect(effect, &controller, &mut should_quit);
            }
        }

        // Handle background task actions (store results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            dispatch_effect(effect, &controller, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translates a key event into a core action, updating presentation
/// state (focus, cursors) along the way.
fn route_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            None
        }
        TuiEvent::CursorUp => {
            match tui.focus {
                Panel::Inventory => tui.inventory_cursor.up(),
                Panel::Cart => tui.cart_cursor.up(),
            }
            None
        }
        TuiEvent::CursorDown => {
            match tui.focus {
                Panel::Inventory => tui.inventory_cursor.down(app.inventory.len()),
                Panel::Cart => tui.cart_cursor.down(app.cart.len()),
            }
            None
        }
        TuiEvent::Increment => match tui.focus {
            Panel::Inventory => tui
                .inventory_cursor
                .selected_in(app.inventory.len())
                .map(Action::IncrementQuantity),
            Panel::Cart => None,
        },
        TuiEvent::Decrement => match tui.focus {
            Panel::Inventory => tui
                .inventory_cursor
                .selected_in(app.inventory.len())
                .map(Action::DecrementQuantity),
            Panel::Cart => None,
        },
        TuiEvent::AddSelected => match tui.focus {
            Panel::Inventory => tui
                .inventory_cursor
                .selected_in(app.inventory.len())
                .map(|index| Action::SubmitAdd(app.inventory[index].to_cart_item())),
            Panel::Cart => None,
        },
        TuiEvent::DeleteSelected => match tui.focus {
            Panel::Cart => tui
                .cart_cursor
                .selected_in(app.cart.len())
                .map(|index| Action::SubmitRemove(app.cart[index].id)),
            Panel::Inventory => None,
        },
        TuiEvent::Checkout => Some(Action::SubmitCheckout),
    }
}

fn dispatch_effect(effect: Effect, controller: &Controller, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::AddToCart(item) => {
            let _ = controller.add_to_cart(item);
        }
        Effect::RemoveFromCart(id) => {
            let _ = controller.remove_from_cart(id);
        }
        Effect::Checkout => {
            let _ = controller.checkout();
        }
        Effect::Quit => *should_quit = true,
    }
}
