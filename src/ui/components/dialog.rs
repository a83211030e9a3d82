//! Modal dialog renderer.
//!
//! One body layout per action: a text field for rename, a label/value table
//! for details, the pending input plus the current users for share, and the
//! confirmation sentence for delete.

use std::fmt::{self, Write};

use crate::ui::viewmodel::{DialogBody, DialogView};

pub fn render_dialog(out: &mut String, dialog: &DialogView) -> fmt::Result {
    writeln!(out, "== {} ==", dialog.title)?;

    match &dialog.body {
        DialogBody::Rename { value } => writeln!(out, "  Name: [{value}]")?,
        DialogBody::Details { rows } => {
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            for (label, value) in rows {
                writeln!(out, "  {label:<width$}  {value}")?;
            }
        }
        DialogBody::Share {
            file_name,
            input,
            shared_with,
        } => {
            writeln!(out, "  Share {file_name} with other users")?;
            writeln!(out, "  Emails: [{input}]")?;
            writeln!(out, "  Shared with {} users", shared_with.len())?;
            for email in shared_with {
                writeln!(out, "    {email}  (remove)")?;
            }
        }
        DialogBody::Delete { message } => writeln!(out, "  {message}")?,
    }

    if let Some(notice) = &dialog.notice {
        writeln!(out, "  ! {notice}")?;
    }

    if !dialog.buttons.is_empty() {
        let buttons: Vec<String> = dialog.buttons.iter().map(|b| format!("[ {b} ]")).collect();
        let status = if dialog.loading { "  working…" } else { "" };
        writeln!(out, "  {}{status}", buttons.join(" "))?;
    }
    Ok(())
}
