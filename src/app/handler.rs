//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::ui::pager::{self, PagerTarget};

use super::state::AppState;

/// Process a key event, dispatching on whether the alert is up.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.alert.is_some() {
        handle_alert_key(state, key);
    } else {
        handle_table_key(state, key);
    }
}

// ── Alert (blocking) ────────────────────────────────────────────

fn handle_alert_key(state: &mut AppState, key: KeyEvent) {
    match state.config.match_key(key) {
        Some(Action::DismissAlert) => state.alert = None,
        Some(Action::Quit) => state.should_quit = true,
        _ => {}
    }
}

// ── Table view (configurable bindings + page-number prompt) ─────

fn handle_table_key(state: &mut AppState, key: KeyEvent) {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    if plain {
        if let KeyCode::Char(c) = key.code {
            if c.is_ascii_digit() {
                state.push_page_digit(c);
                return;
            }
        }
    }

    if !state.page_input.is_empty() {
        match key.code {
            KeyCode::Enter => {
                state.commit_page_input();
                return;
            }
            KeyCode::Backspace => {
                state.page_input.pop();
                return;
            }
            KeyCode::Esc => {
                state.page_input.clear();
                return;
            }
            _ => {}
        }
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevPage => activate(state, PagerTarget::Prev),
        Action::NextPage => activate(state, PagerTarget::Next),
        // While loading, remember the request; it is clamped on arrival.
        Action::FirstPage if state.loading => state.pending_page = Some(1),
        Action::LastPage if state.loading => state.pending_page = Some(usize::MAX),
        Action::FirstPage => {
            state.paginator.first();
        }
        Action::LastPage => {
            state.paginator.last();
        }
        Action::DismissAlert => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.alert.is_some() || state.loading {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let buttons = pager::pager_buttons(state.pager_area, &state.paginator);
    if let Some(target) = pager::hit_test(&buttons, mouse.column, mouse.row) {
        activate(state, target);
    }
}

/// Apply a pager button press.  Out-of-range moves are no-ops.
fn activate(state: &mut AppState, target: PagerTarget) {
    let changed = match target {
        PagerTarget::Prev => state.paginator.prev(),
        PagerTarget::Next => state.paginator.next(),
        PagerTarget::Page(p) => state.paginator.go_to(p),
    };
    if changed {
        tracing::debug!("{target:?} -> page {}", state.paginator.current_page());
    }
}
