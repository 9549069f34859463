use crate::areas::workspace::Workspace;
use crate::artifacts::styling::styled_text::StyledText;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// A working directory together with the sink its report is written to.
pub struct Repository {
    workspace: Workspace,
    writer: RefCell<Box<dyn Write>>,
    colorize: bool,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn Write>, colorize: bool) -> Self {
        Repository {
            workspace: Workspace::resolve(path),
            writer: RefCell::new(writer),
            colorize,
        }
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Writes one line, with escape codes only when colouring is enabled.
    pub fn write_line(&self, text: &StyledText) -> anyhow::Result<()> {
        let line = if self.colorize {
            text.render()
        } else {
            text.plain()
        };

        writeln!(self.writer(), "{line}").context("failed to write status output")
    }
}
