//! Search box and result dropdown renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::render_highlighted_text;
use crate::ui::viewmodel::SearchView;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input and, when open, its dropdown.
///
/// # Layout
///
/// ```text
///   ┌──────────────────────────┐
///   │ Search: report           │
///   └──────────────────────────┘
///   1. [report].pdf   document   9:05pm, 3 Jan
/// ```
pub fn render_search(out: &mut String, search: &SearchView, cols: usize) -> fmt::Result {
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);

    let mut text = format!(" Search: {}", search.query);
    if search.loading {
        text.push_str(" …");
    }
    let padding = inner_width.saturating_sub(text.chars().count());

    writeln!(out, "{margin}┌{}┐", "─".repeat(inner_width))?;
    writeln!(out, "{margin}│{text}{}│", " ".repeat(padding))?;
    writeln!(out, "{margin}└{}┘", "─".repeat(inner_width))?;

    if !search.open {
        return Ok(());
    }

    if let Some(notice) = &search.notice {
        writeln!(out, "{margin}! {notice}")?;
    }
    if let Some(message) = &search.empty_message {
        writeln!(out, "{margin}{message}")?;
    }

    for (index, row) in search.rows.iter().enumerate() {
        writeln!(
            out,
            "{margin}{}. {:<32} {:<9} {}",
            index + 1,
            render_highlighted_text(&row.name, &row.highlight_ranges),
            row.file_type.as_str(),
            row.created
        )?;
    }
    Ok(())
}
