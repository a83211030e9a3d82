//! Header component renderer.
//!
//! Renders the centered title bar, the account line and the navigation
//! items. The mobile sheet only changes how the items are laid out: inline
//! when closed, one per line when open.

use std::fmt::{self, Write};

use crate::ui::viewmodel::NavView;

const TITLE: &str = "filedeck";

/// Renders the header and navigation.
///
/// # Layout
///
/// ```text
///                 filedeck
/// Ada Lovelace <ada@example.com>
/// *Dashboard*  Documents  Images  Media  Others
/// ```
pub fn render_header(out: &mut String, nav: &NavView, cols: usize) -> fmt::Result {
    let padding = cols.saturating_sub(TITLE.len()) / 2;
    writeln!(out, "{}{TITLE}", " ".repeat(padding))?;

    match (&nav.user, nav.loading) {
        (Some((name, email)), _) => writeln!(out, "{name} <{email}>")?,
        (None, true) => writeln!(out, "Loading account…")?,
        (None, false) => writeln!(out, "Signed out")?,
    }

    let label = |item: &crate::ui::viewmodel::NavItemView| {
        if item.active {
            format!("*{}*", item.name)
        } else {
            item.name.to_string()
        }
    };

    if nav.sheet_open {
        for item in &nav.items {
            writeln!(out, "  {:<12} {}", label(item), item.url)?;
        }
    } else {
        let line: Vec<String> = nav.items.iter().map(label).collect();
        writeln!(out, "{}", line.join("  "))?;
    }
    Ok(())
}
