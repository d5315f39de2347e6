//! Pagination control bar: `Previous`, numbered pages, `Next`.
//!
//! Button geometry comes from [`pager_buttons`], which both the renderer and
//! the mouse handler call, so a click always lands on what was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use crate::core::paginator::Paginator;

use super::theme::Theme;

/// Upper bound on numbered buttons shown at once.
const MAX_PAGE_BUTTONS: usize = 9;
const PREV_LABEL: &str = " Previous ";
const NEXT_LABEL: &str = " Next ";

/// What a pager button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerTarget {
    Prev,
    Next,
    Page(usize),
}

/// A laid-out pager button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerButton {
    pub target: PagerTarget,
    pub label: String,
    pub rect: Rect,
    pub enabled: bool,
    /// The current page's number button.
    pub active: bool,
}

/// Lay out the pager bar centred in `area` (first row only).
///
/// The numbered window shrinks until everything fits; `Previous` and `Next`
/// are always present.
pub fn pager_buttons(area: Rect, paginator: &Paginator) -> Vec<PagerButton> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let mut window = MAX_PAGE_BUTTONS;
    let mut labels = button_labels(paginator, window);
    while window > 1 && total_width(&labels) > area.width as usize {
        window -= 1;
        labels = button_labels(paginator, window);
    }

    let width = total_width(&labels);
    let mut x = area.x as usize + (area.width as usize).saturating_sub(width) / 2;
    let right = area.x as usize + area.width as usize;

    let mut buttons = Vec::with_capacity(labels.len());
    for (target, label) in labels {
        let w = label.chars().count();
        if x + w > right {
            break;
        }
        let current = paginator.current_page();
        let (enabled, active) = match target {
            PagerTarget::Prev => (paginator.has_prev(), false),
            PagerTarget::Next => (paginator.has_next(), false),
            PagerTarget::Page(p) => (p != current, p == current),
        };
        buttons.push(PagerButton {
            target,
            label,
            rect: Rect::new(x as u16, area.y, w as u16, 1),
            enabled,
            active,
        });
        x += w + 1;
    }
    buttons
}

/// The enabled button under `(column, row)`, if any.
pub fn hit_test(buttons: &[PagerButton], column: u16, row: u16) -> Option<PagerTarget> {
    let pos = Position::new(column, row);
    buttons
        .iter()
        .find(|b| b.enabled && b.rect.contains(pos))
        .map(|b| b.target)
}

fn button_labels(paginator: &Paginator, window: usize) -> Vec<(PagerTarget, String)> {
    let mut labels = vec![(PagerTarget::Prev, PREV_LABEL.to_string())];
    for page in paginator.page_window(window) {
        labels.push((PagerTarget::Page(page), format!(" {page} ")));
    }
    labels.push((PagerTarget::Next, NEXT_LABEL.to_string()));
    labels
}

/// Label widths plus one-column gaps.
fn total_width(labels: &[(PagerTarget, String)]) -> usize {
    let sum: usize = labels.iter().map(|(_, l)| l.chars().count()).sum();
    sum + labels.len().saturating_sub(1)
}

/// Widget wrapper around [`pager_buttons`].
pub struct Pager<'a> {
    pub paginator: &'a Paginator,
}

impl<'a> Widget for Pager<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for button in pager_buttons(area, self.paginator) {
            let style = if button.active {
                Theme::page_active_style()
            } else if !button.enabled {
                Theme::button_disabled_style()
            } else if matches!(button.target, PagerTarget::Page(_)) {
                Theme::page_style()
            } else {
                Theme::button_style()
            };
            buf.set_stringn(
                button.rect.x,
                button.rect.y,
                &button.label,
                button.rect.width as usize,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(len: usize, page: usize) -> Paginator {
        let mut p = Paginator::default();
        p.set_len(len);
        p.go_to(page);
        p
    }

    fn targets(buttons: &[PagerButton]) -> Vec<PagerTarget> {
        buttons.iter().map(|b| b.target).collect()
    }

    #[test]
    fn lays_out_prev_pages_next() {
        let buttons = pager_buttons(Rect::new(0, 0, 80, 1), &paginator(46, 1));
        assert_eq!(
            targets(&buttons),
            vec![
                PagerTarget::Prev,
                PagerTarget::Page(1),
                PagerTarget::Page(2),
                PagerTarget::Page(3),
                PagerTarget::Page(4),
                PagerTarget::Page(5),
                PagerTarget::Next,
            ]
        );
        assert!(!buttons[0].enabled, "Previous disabled on first page");
        assert!(buttons[1].active);
        assert!(buttons[6].enabled);
    }

    #[test]
    fn next_disabled_on_last_page() {
        let buttons = pager_buttons(Rect::new(0, 0, 80, 1), &paginator(46, 5));
        let next = buttons.last().unwrap();
        assert_eq!(next.target, PagerTarget::Next);
        assert!(!next.enabled);
        assert!(buttons[0].enabled);
    }

    #[test]
    fn window_shrinks_to_fit() {
        let buttons = pager_buttons(Rect::new(0, 0, 30, 1), &paginator(500, 25));
        let pages: Vec<usize> = buttons
            .iter()
            .filter_map(|b| match b.target {
                PagerTarget::Page(p) => Some(p),
                _ => None,
            })
            .collect();
        assert!(!pages.is_empty());
        assert!(pages.contains(&25));
        assert!(pages.len() < MAX_PAGE_BUTTONS);
        assert_eq!(buttons.last().unwrap().target, PagerTarget::Next);
    }

    #[test]
    fn empty_list_has_no_page_numbers() {
        let buttons = pager_buttons(Rect::new(0, 0, 80, 1), &paginator(0, 1));
        assert_eq!(targets(&buttons), vec![PagerTarget::Prev, PagerTarget::Next]);
        assert!(buttons.iter().all(|b| !b.enabled));
    }

    #[test]
    fn hit_test_finds_enabled_buttons_only() {
        let buttons = pager_buttons(Rect::new(0, 5, 80, 1), &paginator(46, 1));
        let page3 = buttons[3].rect;
        assert_eq!(hit_test(&buttons, page3.x, 5), Some(PagerTarget::Page(3)));
        assert_eq!(hit_test(&buttons, page3.x, 6), None);

        let prev = buttons[0].rect;
        assert_eq!(hit_test(&buttons, prev.x, 5), None, "disabled Previous");
        let current = buttons[1].rect;
        assert_eq!(hit_test(&buttons, current.x, 5), None, "current page");
    }
}
