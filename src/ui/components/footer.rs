//! Footer component renderer.
//!
//! Renders the command hint line, which depends on what is currently open.

use std::fmt::{self, Write};

use crate::ui::viewmodel::UIViewModel;

const SEARCH_HINTS: &str = "type <text> | pick <n> | menu <n> | blur | retry";
const MENU_HINTS: &str = "do <rename|details|share|download|delete> | close";
const DIALOG_HINTS: &str = "name <text> | emails <a,b> | unshare <email> | submit | close";
const NAV_HINTS: &str = "nav | go <path> | logout | quit";

/// Renders the hint line for the current view.
pub fn render_footer(out: &mut String, vm: &UIViewModel, cols: usize) -> fmt::Result {
    let hints = if vm.dialog.is_some() {
        DIALOG_HINTS
    } else if vm.menu.is_some() {
        MENU_HINTS
    } else if vm.search.open {
        SEARCH_HINTS
    } else {
        NAV_HINTS
    };

    writeln!(out, "{}", "─".repeat(cols))?;
    writeln!(out, "{hints}")
}
