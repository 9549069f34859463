use crate::areas::git::StatusProvider;
use crate::areas::repository::Repository;
use crate::artifacts::status::classifier::classify;
use crate::artifacts::status::section::Section;
use crate::artifacts::styling::palette::{self, icons};
use crate::artifacts::styling::style::Style;
use crate::artifacts::styling::styled_text::StyledText;
use std::io::Write;

impl Repository {
    /// Prints the directory banner followed by the colourised status report.
    ///
    /// Returns `Ok(false)` when the status command could not be run or
    /// exited unsuccessfully; a single failure line has been written in that
    /// case. Errors are reserved for failures of the output sink itself.
    pub fn colorize_status(&self, provider: &dyn StatusProvider) -> anyhow::Result<bool> {
        self.write_line(&self.banner())?;

        let output = match provider.status(self.path()) {
            Ok(output) if output.success => output,
            Ok(output) => {
                tracing::debug!(exit_code = ?output.exit_code, "status command failed");
                self.write_line(&failure_line(&output.failure_message()))?;
                return Ok(false);
            }
            Err(err) => {
                tracing::debug!(error = %err, "status command could not be run");
                self.write_line(&failure_line(&format!("{err:#}")))?;
                return Ok(false);
            }
        };

        let mut section = Section::None;
        let mut count = 0usize;
        for line in output.text.lines() {
            let (classified, next) = classify(line, section);
            section = next;
            self.write_line(&classified.text)?;
            count += 1;
        }

        self.writer().flush()?;
        tracing::debug!(lines = count, "status report written");

        Ok(true)
    }

    fn banner(&self) -> StyledText {
        let mut text = StyledText::new();
        text.append(format!("{} ", icons::FOLDER), Style::NONE)
            .append("chdir:", palette::BANNER_LABEL)
            .append(" ", Style::NONE)
            .append(self.path().display().to_string(), palette::BANNER_PATH);
        text
    }
}

fn failure_line(message: &str) -> StyledText {
    let mut text = StyledText::new();
    text.append(format!("{} ", icons::ERROR), Style::NONE)
        .append(message, palette::FAILURE);
    text
}
