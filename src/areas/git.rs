use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

const GIT_PROGRAM: &str = "git";
const STATUS_ARGS: [&str; 3] = ["-c", "color.status=never", "status"];

/// Raw result of one status invocation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusOutput {
    /// Standard output followed by standard error.
    #[new(into)]
    pub text: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl StatusOutput {
    /// One-line description of a failed invocation.
    pub fn failure_message(&self) -> String {
        let reason = match self.exit_code {
            Some(code) => format!("git status exited with {code}"),
            None => "git status was terminated by a signal".to_string(),
        };

        match self.text.lines().map(str::trim).find(|line| !line.is_empty()) {
            Some(detail) => format!("{reason}: {detail}"),
            None => reason,
        }
    }
}

/// Produces the raw long-format status text for a working directory.
pub trait StatusProvider {
    fn status(&self, dir: &Path) -> anyhow::Result<StatusOutput>;
}

/// Runs the `git` executable with status colouring turned off.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program(GIT_PROGRAM)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        GitCli {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProvider for GitCli {
    fn status(&self, dir: &Path) -> anyhow::Result<StatusOutput> {
        let output = Command::new(&self.program)
            .args(STATUS_ARGS)
            .current_dir(dir)
            .output()
            .with_context(|| {
                format!(
                    "failed to run {} status in {}",
                    self.program.to_string_lossy(),
                    dir.display()
                )
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(
            dir = %dir.display(),
            status = %output.status,
            bytes = text.len(),
            "git status finished"
        );

        Ok(StatusOutput::new(
            text,
            output.status.success(),
            output.status.code(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(
        "fatal: not a git repository (or any of the parent directories): .git\n",
        Some(128),
        "git status exited with 128: fatal: not a git repository (or any of the parent directories): .git"
    )]
    #[case("\n\n  error: bad config  \nmore\n", Some(1), "git status exited with 1: error: bad config")]
    #[case("", Some(2), "git status exited with 2")]
    #[case("", None, "git status was terminated by a signal")]
    fn failure_message_is_a_single_line(
        #[case] text: &str,
        #[case] exit_code: Option<i32>,
        #[case] expected: &str,
    ) {
        let output = StatusOutput::new(text, false, exit_code);

        assert_eq!(output.failure_message(), expected);
    }

    #[test]
    fn missing_program_is_an_error() {
        let cli = GitCli::with_program("definitely-not-a-git-binary-on-path");

        let err = cli.status(&std::env::temp_dir()).unwrap_err();

        assert!(format!("{err:#}").contains("failed to run definitely-not-a-git-binary-on-path status"));
    }
}
