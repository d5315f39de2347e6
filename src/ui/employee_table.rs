//! Ratatui widget that renders one page of employees as a four-column table.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Cell, Row, Table, Widget},
};

use crate::core::employee::Employee;

use super::theme::Theme;

pub const COLUMNS: [&str; 4] = ["ID", "Name", "Email", "Role"];

/// The table widget itself: created fresh each frame.
pub struct EmployeeTable<'a> {
    rows: &'a [Employee],
    block: Option<Block<'a>>,
}

impl<'a> EmployeeTable<'a> {
    pub fn new(rows: &'a [Employee]) -> Self {
        Self { rows, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for EmployeeTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(COLUMNS.map(Cell::from)).style(Theme::header_style());

        let rows = self.rows.iter().enumerate().map(|(i, emp)| {
            let style = if i % 2 == 0 {
                Theme::row_style()
            } else {
                Theme::alt_row_style()
            };
            Row::new(emp.cells().map(Cell::from)).style(style)
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(10),
        ];

        let mut table = Table::new(rows, widths).header(header).column_spacing(2);
        if let Some(block) = self.block {
            table = table.block(block);
        }
        Widget::render(table, area, buf);
    }
}
