//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the application state and turns it into cells on the
//! terminal.  No network I/O happens here.

pub mod employee_table;
pub mod layout;
pub mod pager;
pub mod popup;
pub mod spinner;
pub mod theme;

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::config::Action;

use self::{
    employee_table::EmployeeTable, layout::AppLayout, pager::Pager, popup::AlertPopup,
    spinner::LoadingIndicator, theme::Theme,
};

pub const TITLE: &str = "Employee Data Table";

/// Draw one full frame.  Records the pager position for mouse hit-testing.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE).style(Theme::title_style()),
        layout.title_area,
    );

    if let Some(ref error) = state.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Theme::error_style()),
            layout.error_area,
        );
    }

    let pages = state.paginator.total_pages();
    let block_title = if state.loading || pages == 0 {
        " Employees ".to_string()
    } else {
        format!(
            " Employees · page {} of {pages} · {} total ",
            state.paginator.current_page(),
            state.paginator.len()
        )
    };
    let table_block = Block::default()
        .title(block_title)
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());

    if state.loading {
        let inner = table_block.inner(layout.table_area);
        frame.render_widget(table_block, layout.table_area);
        frame.render_widget(LoadingIndicator { tick: state.tick }, inner);
    } else {
        frame.render_widget(
            EmployeeTable::new(state.visible_employees()).block(table_block),
            layout.table_area,
        );
    }

    frame.render_widget(
        Pager {
            paginator: &state.paginator,
        },
        layout.pager_area,
    );
    state.pager_area = layout.pager_area;

    let status = if state.page_input.is_empty() {
        Line::raw(state.config.status_bar_hint())
    } else {
        Line::from(vec![
            Span::raw("Go to page: "),
            Span::styled(format!("{}_", state.page_input), Theme::page_input_style()),
        ])
    };
    frame.render_widget(
        Paragraph::new(status).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if let Some(ref message) = state.alert {
        let hint = state.config.short_binding(Action::DismissAlert);
        frame.render_widget(
            AlertPopup {
                message,
                dismiss_hint: &hint,
            },
            frame.area(),
        );
    }
}
