//! Status screen component renderer.
//!
//! Renders the full-screen loading and fetch-failure states that replace the
//! menu while no data is available.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status screen.
///
/// Displays a centered two-line message: `Loading...` while the fetch is
/// pending, or the static fetch failure message after a terminal failure.
/// No item list is rendered in either case.
///
/// # Layout
///
/// ```text
/// [5 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses the `status_fg` theme color, or `error_fg` for failures;
/// the subtitle uses `text_dim` with dim styling.
pub fn render_status(status: &StatusInfo, theme: &Theme, cols: usize) {
    let color = if status.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.status_fg
    };

    let msg_len = status.message.len();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", status.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = status.subtitle.len();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", status.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
