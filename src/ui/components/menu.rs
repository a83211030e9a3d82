//! Action menu renderer.

use std::fmt::{self, Write};

use crate::ui::viewmodel::MenuView;

pub fn render_menu(out: &mut String, menu: &MenuView) -> fmt::Result {
    writeln!(out, "Actions for {}", menu.file_name)?;
    for item in &menu.items {
        let suffix = if item.kind.needs_dialog() { "…" } else { "" };
        writeln!(out, "  - {}{suffix}", item.label)?;
    }
    Ok(())
}
