//! Composable UI component renderers.
//!
//! Each component appends plain text lines to a `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Title, account line and navigation items
//! - [`search`]: Search input box and result dropdown
//! - [`menu`]: Per-file action menu
//! - [`dialog`]: Modal dialog of the chosen action
//! - [`footer`]: Command hints

mod dialog;
mod footer;
mod header;
mod menu;
mod search;

use std::fmt::{self, Write};

use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use footer::render_footer;
use header::render_header;
use menu::render_menu;
use search::render_search;

/// Renders the full screen layout.
///
/// Layout structure:
/// ```text
/// [Header + navigation]
/// [Border]
/// [Route]
/// [Search box + dropdown]
/// [Menu, if open]
/// [Dialog, if open]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(out: &mut String, vm: &UIViewModel, cols: usize) -> fmt::Result {
    render_header(out, &vm.nav, cols)?;
    writeln!(out, "{}", "─".repeat(cols))?;
    writeln!(out, "@ {}", vm.route)?;
    render_search(out, &vm.search, cols)?;

    if let Some(menu) = &vm.menu {
        writeln!(out)?;
        render_menu(out, menu)?;
    }
    if let Some(dialog) = &vm.dialog {
        writeln!(out)?;
        render_dialog(out, dialog)?;
    }

    render_footer(out, vm, cols)
}
