//! Shared formatting utilities.
//!
//! Text helpers used by both the view model computation and the components:
//! dates, byte sizes, thumbnails, and fuzzy match highlighting.
//!
//! # Example
//!
//! ```rust
//! use filedeck::ui::helpers::{convert_file_size, render_highlighted_text};
//!
//! assert_eq!(convert_file_size(1536), "1.5 KB");
//! assert_eq!(render_highlighted_text("report.pdf", &[(0, 3)]), "[rep]ort.pdf");
//! ```

use chrono::{DateTime, Utc};

use crate::domain::{File, FileType};

/// Placeholder for a missing timestamp.
const NO_DATE: &str = "—";

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Formats a timestamp as `9:05pm, 3 Jan`.
#[must_use]
pub fn format_date_time(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || NO_DATE.to_string(),
        |ts| ts.format("%-I:%M%P, %-d %b").to_string(),
    )
}

/// Human-readable byte size with one decimal for KB and above.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convert_file_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < KB {
        format!("{bytes} Bytes")
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else if size < GB {
        format!("{:.1} MB", size / MB)
    } else {
        format!("{:.1} GB", size / GB)
    }
}

/// Icon path for a file extension, falling back to the type's icon.
#[must_use]
pub fn file_icon(extension: &str, file_type: FileType) -> String {
    let name = match extension.to_ascii_lowercase().as_str() {
        "pdf" => "file-pdf",
        "doc" | "docx" | "odt" | "rtf" => "file-doc",
        "csv" => "file-csv",
        "txt" | "md" => "file-txt",
        "xls" | "xlsx" | "ods" => "file-document",
        "svg" => "file-image",
        "mp4" | "mkv" | "mov" | "avi" | "webm" => "file-video",
        "mp3" | "wav" | "ogg" | "flac" | "m4a" => "file-audio",
        _ => match file_type {
            FileType::Document => "file-document",
            FileType::Image => "file-image",
            FileType::Video => "file-video",
            FileType::Audio => "file-audio",
            FileType::Other => "file-other",
        },
    };
    format!("/assets/icons/{name}.svg")
}

/// Thumbnail shown next to a file: the picture itself for images, an icon
/// for everything else.
#[must_use]
pub fn thumbnail_for(file: &File) -> String {
    if file.file_type == FileType::Image && file.extension != "svg" {
        file.url.clone()
    } else {
        file_icon(&file.extension, file.file_type)
    }
}

/// Wraps the highlighted character ranges of `text` in brackets.
///
/// Ranges are `(start, end)` character indices with an exclusive end.
/// Out-of-bounds ends are clamped.
#[must_use]
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        out.extend(&chars[current_pos..start]);
        out.push('[');
        out.extend(&chars[start..end]);
        out.push(']');
        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}
