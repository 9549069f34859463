use crate::artifacts::styling::style::{RESET, Style};
use derive_new::new;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    #[new(into)]
    pub text: String,
    pub style: Style,
}

/// An ordered sequence of styled segments making up one output line.
///
/// Segments are never merged or reordered: two adjacent segments sharing a
/// style each get their own start/reset pair when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.segments.push(Segment::new(text, style));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Concatenates the segments, wrapping every non-empty style in its start
    /// code and a reset.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.style.start_code() {
                Some(start) => {
                    out.push_str(&start);
                    out.push_str(&segment.text);
                    out.push_str(RESET);
                }
                None => out.push_str(&segment.text),
            }
        }
        out
    }

    /// Concatenates the segment texts without any escape codes.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        let mut styled = StyledText::new();
        styled.append(text, Style::NONE);
        styled
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
