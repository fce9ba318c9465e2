//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame and query text display.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Placeholder shown while the query is empty.
const PLACEHOLDER: &str = "Search Food...";

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the current query, or a dimmed
/// placeholder while the query is empty. The box is horizontally centered
/// with margins on both sides.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: {query} │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(2 * SEARCH_BOX_MARGIN);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2502}");

    let content = if search.query.is_empty() {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        format!(" {PLACEHOLDER}")
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        format!(" Search: {}", search.query)
    };

    let shown = truncate_chars(&content, inner_width);
    let shown_len = shown.chars().count();
    print!("{shown}");
    print!("{}", " ".repeat(inner_width.saturating_sub(shown_len)));

    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_truncates_multibyte_query_by_characters() {
        let theme = Theme::default();
        // inner width 10; the query line overflows it mid-character.
        let search = SearchBarInfo {
            query: "éééé".to_string(),
        };

        let next_row = render_search_bar(4, &search, &theme, 22);
        assert_eq!(next_row, 7);
    }

    #[test]
    fn empty_query_box_shows_placeholder_without_overflow() {
        let theme = Theme::default();
        let search = SearchBarInfo {
            query: String::new(),
        };

        let next_row = render_search_bar(4, &search, &theme, 12);
        assert_eq!(next_row, 7);
    }
}
