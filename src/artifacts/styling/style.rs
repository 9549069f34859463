use colored::Color;

pub const RESET: &str = "\x1b[0m";

const SGR_BOLD: &str = "1";
const SGR_DIM: &str = "2";

/// A display style: an optional foreground colour plus bold/dim attributes.
///
/// The default value is the empty style, which renders without any escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg: Option<Color>,
    bold: bool,
    dimmed: bool,
}

impl Style {
    pub const NONE: Style = Style {
        fg: None,
        bold: false,
        dimmed: false,
    };

    pub const fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            bold: false,
            dimmed: false,
        }
    }

    pub const fn bold(self) -> Self {
        Style { bold: true, ..self }
    }

    pub const fn dimmed(self) -> Self {
        Style {
            dimmed: true,
            ..self
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.dimmed
    }

    /// The SGR sequence that switches this style on, or `None` for the empty style.
    pub fn start_code(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut params = Vec::with_capacity(3);
        if self.bold {
            params.push(SGR_BOLD.to_string());
        }
        if self.dimmed {
            params.push(SGR_DIM.to_string());
        }
        if let Some(color) = self.fg {
            params.push(color.to_fg_str().to_string());
        }

        Some(format!("\x1b[{}m", params.join(";")))
    }
}
