//! Layout helpers, split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: title, error line, table, pager, status bar.
pub struct AppLayout {
    pub title_area: Rect,
    pub error_area: Rect,
    pub table_area: Rect,
    pub pager_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // error message (blank when none)
                Constraint::Min(3),    // table (takes all remaining space)
                Constraint::Length(1), // pager
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            error_area: chunks[1],
            table_area: chunks[2],
            pager_area: chunks[3],
            status_area: chunks[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_gets_the_slack() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title_area.y, 0);
        assert_eq!(layout.table_area.height, 20);
        assert_eq!(layout.pager_area.y, 22);
        assert_eq!(layout.status_area.y, 23);
    }
}
