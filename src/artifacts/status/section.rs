use std::fmt;

/// The status section opened by the most recent header line.
///
/// Threaded explicitly through every classification call; starts as `None`
/// for each status invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    None,
    Staged,
    NotStaged,
    Untracked,
}

impl Section {
    /// Key used by the section style table. `None` maps to the empty key.
    pub const fn key(self) -> &'static str {
        match self {
            Section::None => "",
            Section::Staged => "staged",
            Section::NotStaged => "not_staged",
            Section::Untracked => "untracked",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::None => write!(f, "none"),
            section => write!(f, "{}", section.key()),
        }
    }
}
