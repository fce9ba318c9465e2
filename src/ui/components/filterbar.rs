//! Category tab bar component renderer.
//!
//! Renders the row of the four category filter tabs. Exactly one tab is
//! styled selected at any time.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Spacing between adjacent tabs.
const TAB_GAP: usize = 2;

/// Renders the category tab bar at the specified row.
///
/// Tabs appear in fixed order (`all breakfast lunch dinner`), centered
/// horizontally. The selected tab is drawn with the selected-tab colors and
/// bold styling; the rest use the plain tab color.
///
/// # Layout
///
/// ```text
/// [padding]  all   breakfast   lunch   dinner  [padding]
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    // Each tab renders as " name " plus the gap to its neighbor.
    let total_width: usize = bar
        .tabs
        .iter()
        .map(|tab| tab.as_str().len() + 2)
        .sum::<usize>()
        + TAB_GAP * bar.tabs.len().saturating_sub(1);
    let padding = (cols.saturating_sub(total_width)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    for (idx, tab) in bar.tabs.iter().enumerate() {
        if idx > 0 {
            print!("{}", " ".repeat(TAB_GAP));
        }

        if *tab == bar.selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_selected_fg));
            print!("{}", Theme::bg(&theme.colors.tab_selected_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.tab_fg));
        }

        print!(" {} ", tab.as_str());
        print!("{}", Theme::reset());
    }

    let used = padding + total_width;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
