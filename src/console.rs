//! Line-oriented command front end.
//!
//! Each input line is one command. Commands that change state map to an
//! [`Event`]; the rest control the console itself.
//!
//! # Commands
//!
//! | Command            | Event                         |
//! |--------------------|-------------------------------|
//! | `type <text>`      | `QueryChanged`                |
//! | `focus` / `blur`   | `SearchFocused` / `SearchBlurred` |
//! | `esc`              | `DismissSearch`               |
//! | `pick <n>`         | `SelectResult` (1-based)      |
//! | `retry`            | `RetrySearch`                 |
//! | `menu <n>`         | `OpenMenu` for result `n`     |
//! | `do <action>`      | `OpenAction`                  |
//! | `name <text>`      | `RenameInput`                 |
//! | `emails <a,b>`     | `ShareInput`                  |
//! | `unshare <email>`  | `RemoveUser`                  |
//! | `submit`           | `SubmitAction`                |
//! | `close`            | `CloseDialog`                 |
//! | `nav`              | `ToggleNav`                   |
//! | `go <path>`        | `Navigate`                    |
//! | `logout`           | `SignOut`                     |
//!
//! Plus `show`, `help` and `quit`.

use crate::app::{ActionKind, AppState, Event};
use crate::domain::error::{FiledeckError, Result};
use crate::domain::Route;

/// Help text printed by `help`.
pub const HELP: &str = "\
type <text>      set the search query
focus | blur     focus or leave the search box
esc              close the result list
pick <n>         open result n
retry            repeat a failed search
menu <n>         open the action menu of result n
do <action>      rename, details, share, download or delete
name <text>      edit the rename field
emails <a,b>     edit the share field
unshare <email>  stop sharing with a user
submit           submit the open dialog
close            close the menu or dialog
nav              toggle the navigation sheet
go <path>        navigate, e.g. go /images?q=cat
logout           sign out
show             redraw
quit             exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Show,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

fn invalid(message: impl Into<String>) -> FiledeckError {
    FiledeckError::Runtime(message.into())
}

/// Parses a 1-based row number into an index.
fn row_index(arg: &str) -> Result<usize> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| invalid(format!("expected a row number, got `{arg}`")))
}

/// Parses one line of input.
///
/// `state` resolves row numbers to files for `menu`.
///
/// # Errors
///
/// Returns [`FiledeckError::Runtime`] for unknown commands or bad
/// arguments, and [`FiledeckError::Route`] for unparsable paths.
pub fn parse_command(line: &str, state: &AppState) -> Result<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = line
        .trim_start()
        .split_once(' ')
        .unwrap_or((line.trim(), ""));

    let event = match word {
        "" => return Ok(Command::Nothing),
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),

        "type" => Event::QueryChanged(rest.to_string()),
        "focus" => Event::SearchFocused,
        "blur" => Event::SearchBlurred,
        "esc" => Event::DismissSearch,
        "pick" => Event::SelectResult(row_index(rest)?),
        "retry" => Event::RetrySearch,
        "menu" => {
            let index = row_index(rest)?;
            let file = state
                .search
                .visible_results()
                .get(index)
                .cloned()
                .ok_or_else(|| invalid(format!("no result {}", index + 1)))?;
            Event::OpenMenu(file)
        }
        "do" => ActionKind::from_label(rest)
            .map(Event::OpenAction)
            .ok_or_else(|| invalid(format!("unknown action `{}`", rest.trim())))?,
        "name" => Event::RenameInput(rest.to_string()),
        "emails" => Event::ShareInput(rest.to_string()),
        "unshare" => Event::RemoveUser(rest.trim().to_string()),
        "submit" => Event::SubmitAction,
        "close" => Event::CloseDialog,
        "nav" => Event::ToggleNav,
        "go" => Event::Navigate(Route::parse(rest)?),
        "logout" => Event::SignOut,
        other => return Err(invalid(format!("unknown command `{other}`, try `help`"))),
    };

    Ok(Command::Event(event))
}
