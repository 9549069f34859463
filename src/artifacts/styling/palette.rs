//! Colours, icons and the fixed styles of the status report.

use crate::artifacts::styling::style::Style;
use colored::Color;

pub const MAGENTA: Color = Color::AnsiColor(201);
pub const PURPLE: Color = Color::AnsiColor(135);
pub const BLUE: Color = Color::AnsiColor(27);
pub const PINK: Color = Color::AnsiColor(219);
pub const BRIGHT_CYAN: Color = Color::AnsiColor(51);
pub const RED_PINK: Color = Color::AnsiColor(198);

pub mod icons {
    pub const FOLDER: &str = "📁";
    pub const ERROR: &str = "❌";
    pub const INFO: &str = "ℹ️";
    pub const GIT: &str = "🌿";
    pub const SUCCESS: &str = "✅";
}

pub const HEADER: Style = Style::fg(Color::Yellow).bold();
pub const STATUS_KEYWORD: Style = Style::fg(Color::Yellow).bold();
pub const RENAME_TARGET: Style = Style::fg(Color::Cyan);
pub const HINT: Style = Style::NONE.dimmed();
pub const SUCCESS: Style = Style::fg(Color::Yellow);
pub const WARNING: Style = Style::fg(Color::Yellow);
pub const BRANCH: Style = Style::fg(Color::Cyan).bold();
pub const BANNER_LABEL: Style = Style::fg(BLUE).bold();
pub const BANNER_PATH: Style = Style::fg(PINK).bold();
pub const FAILURE: Style = Style::fg(RED_PINK).bold();
