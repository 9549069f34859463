use crate::artifacts::status::section::Section;
use crate::artifacts::styling::palette;
use crate::artifacts::styling::style::Style;
use colored::Color;

/// Style of the path part of a file status line, keyed by the status keyword.
pub static FILE_STYLES: phf::Map<&'static str, Style> = phf::phf_map! {
    "modified" => Style::fg(palette::MAGENTA).bold(),
    "deleted" => Style::fg(Color::Red).bold(),
    "new file" => Style::fg(Color::Green).bold(),
    "renamed" => Style::fg(Color::Cyan).bold(),
    "added" => Style::fg(Color::Green).bold(),
};

/// Style of indented filenames, keyed by the section they appear in.
pub static SECTION_STYLES: phf::Map<&'static str, Style> = phf::phf_map! {
    "untracked" => Style::fg(palette::PURPLE).bold(),
    "staged" => Style::fg(Color::Green),
    "not_staged" => Style::fg(palette::BRIGHT_CYAN),
};

/// Unknown keywords fall back to the empty style.
pub fn file_style(keyword: &str) -> Style {
    FILE_STYLES.get(keyword).copied().unwrap_or_default()
}

pub fn section_style(section: Section) -> Style {
    SECTION_STYLES.get(section.key()).copied().unwrap_or_default()
}
