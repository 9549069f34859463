//! Line classification for `git status` long-format output
//!
//! Every line is matched against an ordered rule table; the first rule that
//! accepts the line decides its kind, its styled rendering and the section
//! that is open for the following lines. Lines no rule accepts are passed
//! through unstyled, so classification never fails.
//!
//! ## Rule order
//!
//! 1. branch (`On branch <name>`)
//! 2. up to date with upstream
//! 3. divergence (`ahead`, `behind`, `diverged` anywhere in the line)
//! 4. section headers and other colon-terminated lines
//! 5. usage hints (`(use "git ...`)
//! 6. clean working tree
//! 7. file status entries (`modified:   path`)
//! 8. indented text (filenames inside the open section)
//!
//! The order matters because the shapes overlap: a header is also indented
//! text, and a divergence message may contain a colon.

use crate::artifacts::status::section::Section;
use crate::artifacts::styling::palette::{self, icons};
use crate::artifacts::styling::style::Style;
use crate::artifacts::styling::styled_text::StyledText;
use crate::artifacts::styling::tables::{file_style, section_style};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const BRANCH_REGEX: &str = r"^On branch (.+)$";
pub const HINT_REGEX: &str = r#"^\s*\(use "git "#;
pub const FILE_STATUS_REGEX: &str = r"^(\s*)(modified|deleted|new file|renamed|added):\s+(.+)$";
pub const INDENTED_REGEX: &str = r"^(\s+)(.+)$";

const UP_TO_DATE: &str = "Your branch is up to date";
const DIVERGENCE_MARKERS: [&str; 3] = ["ahead", "behind", "diverged"];
const NOTHING_TO_COMMIT: &str = "nothing to commit";
const CLEAN_WORKING_TREE: &str = "clean working tree";
const RENAME_ARROW: &str = "->";
const HEADER_INDENT: &str = "    ";

/// Header shapes in priority order with the section each one opens.
const HEADER_PATTERNS: [(&str, Section); 5] = [
    (r"^\s*Changes to be committed:", Section::Staged),
    (r"^\s*Changes not staged for commit:", Section::NotStaged),
    (r"^\s*Untracked files:", Section::Untracked),
    (r"^\s*no changes added to commit", Section::None),
    (r"^\s*.+:$", Section::None),
];

static BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BRANCH_REGEX).expect("branch pattern compiles"));
static HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HINT_REGEX).expect("hint pattern compiles"));
static FILE_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FILE_STATUS_REGEX).expect("file status pattern compiles"));
static INDENTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INDENTED_REGEX).expect("indented pattern compiles"));
static HEADERS: LazyLock<Vec<(Regex, Section)>> = LazyLock::new(|| {
    HEADER_PATTERNS
        .iter()
        .map(|(pattern, section)| {
            (
                Regex::new(pattern).expect("header pattern compiles"),
                *section,
            )
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Branch,
    UpToDate,
    Divergence,
    Header,
    Hint,
    CleanTree,
    FileStatus,
    IndentedText,
    Plain,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Branch => "branch",
            LineKind::UpToDate => "up-to-date",
            LineKind::Divergence => "divergence",
            LineKind::Header => "header",
            LineKind::Hint => "hint",
            LineKind::CleanTree => "clean-tree",
            LineKind::FileStatus => "file-status",
            LineKind::IndentedText => "indented-text",
            LineKind::Plain => "plain",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: LineKind,
    pub text: StyledText,
}

type Matcher = fn(&str, Section) -> Option<(StyledText, Section)>;

struct Rule {
    kind: LineKind,
    matcher: Matcher,
}

static RULES: [Rule; 8] = [
    Rule {
        kind: LineKind::Branch,
        matcher: match_branch,
    },
    Rule {
        kind: LineKind::UpToDate,
        matcher: match_up_to_date,
    },
    Rule {
        kind: LineKind::Divergence,
        matcher: match_divergence,
    },
    Rule {
        kind: LineKind::Header,
        matcher: match_header,
    },
    Rule {
        kind: LineKind::Hint,
        matcher: match_hint,
    },
    Rule {
        kind: LineKind::CleanTree,
        matcher: match_clean_tree,
    },
    Rule {
        kind: LineKind::FileStatus,
        matcher: match_file_status,
    },
    Rule {
        kind: LineKind::IndentedText,
        matcher: match_indented,
    },
];

/// Classifies one line of status output given the currently open section.
///
/// Returns the styled line and the section that is open after it.
pub fn classify(line: &str, section: Section) -> (Classified, Section) {
    let (kind, text, next) = RULES
        .iter()
        .find_map(|rule| {
            (rule.matcher)(line, section).map(|(text, next)| (rule.kind, text, next))
        })
        .unwrap_or_else(|| (LineKind::Plain, StyledText::from(line), section));

    tracing::trace!(%kind, from = %section, to = %next, line, "classified status line");

    (Classified { kind, text }, next)
}

fn match_branch(line: &str, _: Section) -> Option<(StyledText, Section)> {
    let caps = BRANCH.captures(line)?;

    let mut text = StyledText::new();
    text.append(format!("{} On branch ", icons::INFO), Style::NONE)
        .append(format!("{} {}", icons::GIT, &caps[1]), palette::BRANCH);

    Some((text, Section::None))
}

fn match_up_to_date(line: &str, _: Section) -> Option<(StyledText, Section)> {
    line.contains(UP_TO_DATE)
        .then(|| (success_line(line), Section::None))
}

fn match_divergence(line: &str, _: Section) -> Option<(StyledText, Section)> {
    if !DIVERGENCE_MARKERS.iter().any(|marker| line.contains(marker)) {
        return None;
    }

    let mut text = StyledText::new();
    text.append(line, palette::WARNING);
    Some((text, Section::None))
}

fn match_header(line: &str, _: Section) -> Option<(StyledText, Section)> {
    let section = HEADERS
        .iter()
        .find(|(re, _)| re.is_match(line))
        .map(|(_, section)| *section)?;

    let mut text = StyledText::new();
    text.append(
        format!("{HEADER_INDENT}{}", line.trim_start()),
        palette::HEADER,
    );
    Some((text, section))
}

fn match_hint(line: &str, section: Section) -> Option<(StyledText, Section)> {
    if !HINT.is_match(line) {
        return None;
    }

    let mut text = StyledText::new();
    text.append(line, palette::HINT);
    Some((text, section))
}

// Prefix check for "nothing to commit", substring check for "clean working tree".
fn match_clean_tree(line: &str, _: Section) -> Option<(StyledText, Section)> {
    let lower = line.trim().to_lowercase();
    let clean = lower.starts_with(NOTHING_TO_COMMIT) || lower.contains(CLEAN_WORKING_TREE);

    clean.then(|| (success_line(line), Section::None))
}

fn match_file_status(line: &str, section: Section) -> Option<(StyledText, Section)> {
    let caps = FILE_STATUS.captures(line)?;
    let (indent, keyword, rest) = (&caps[1], &caps[2], &caps[3]);
    let style = file_style(keyword);

    let mut text = StyledText::new();
    text.append(indent, Style::NONE)
        .append(format!("{keyword}: "), palette::STATUS_KEYWORD);

    match rest.split_once(RENAME_ARROW) {
        Some((from, to)) => {
            text.append(from.trim(), style)
                .append(" -> ", Style::NONE)
                .append(to.trim(), palette::RENAME_TARGET);
        }
        None => {
            text.append(rest, style);
        }
    }

    Some((text, section))
}

fn match_indented(line: &str, section: Section) -> Option<(StyledText, Section)> {
    let caps = INDENTED.captures(line)?;

    let mut text = StyledText::new();
    text.append(&caps[1], Style::NONE)
        .append(&caps[2], section_style(section));

    Some((text, section))
}

fn success_line(line: &str) -> StyledText {
    let mut text = StyledText::new();
    text.append(format!("{} ", icons::SUCCESS), Style::NONE)
        .append(line, palette::SUCCESS);
    text
}
