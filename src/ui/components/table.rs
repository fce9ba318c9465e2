//! Dish table component renderer.
//!
//! Renders the visible menu as a three-column table (NAME, TYPE, PRICE) with
//! selection highlighting and query match highlighting in the NAME column.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DishRow;

/// Fixed width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 32;

/// Fixed width of the TYPE column.
const KIND_COLUMN_WIDTH: usize = 12;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<NAME_COLUMN_WIDTH$} {:<KIND_COLUMN_WIDTH$} {:<}", "NAME", "TYPE", "PRICE");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all dish rows starting at the specified row.
///
/// When `items` is empty, renders a single dimmed placeholder line instead,
/// covering both an empty filter result and the absent view after the
/// empty-query quirk.
///
/// # Returns
///
/// The next available row position
pub fn render_table_rows(row: usize, items: &[DishRow], theme: &Theme, cols: usize) -> usize {
    if items.is_empty() {
        position_cursor(row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  No dishes to show");
        print!("{}", Theme::reset());
        return row + 1;
    }

    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single dish row at the specified row position.
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering. Match highlighting is applied to the NAME
/// column only, and suppressed on the selected row.
fn render_table_row(row: usize, item: &DishRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    }

    let name_len = item.name.chars().count().min(NAME_COLUMN_WIDTH);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len) + 1));

    print!("{:<KIND_COLUMN_WIDTH$}", item.kind);
    print!(" {}", item.price);

    let line_len = NAME_COLUMN_WIDTH + 1 + KIND_COLUMN_WIDTH.max(item.kind.len()) + 1 + item.price.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
