use anyhow::Result;
use clap::{Parser, ValueEnum};
use git_tint::areas::git::GitCli;
use git_tint::areas::repository::Repository;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "git-tint",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A colourised git status",
    long_about = "Runs `git status` in the given directory and reprints its output \
    line by line with branch, section, hint and file entries highlighted.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, default_value = ".", help = "The working directory to report on")]
    path: PathBuf,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to use colours")]
    color: ColorChoice,
    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    let colorize = init_colors(cli.color);

    let repository = Repository::new(&cli.path, Box::new(std::io::stdout()), colorize);
    tracing::debug!(path = %repository.path().display(), colorize, "resolved working directory");

    if repository.colorize_status(&GitCli::new())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("git_tint=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn init_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }

    colored::control::SHOULD_COLORIZE.should_colorize()
}
