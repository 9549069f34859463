use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

const GIT_ENV: [(&str, &str); 5] = [
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("LC_ALL", "C"),
    ("LANG", "C"),
    ("NO_COLOR", "1"),
];

#[fixture]
pub fn empty_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repository_dir(empty_dir: TempDir) -> TempDir {
    run_git_command(empty_dir.path(), &["-c", "init.defaultBranch=main", "init"])
        .assert()
        .success();

    empty_dir
}

#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    write_file(&repository_dir, "1.txt", "one");
    write_file(&repository_dir, "a/2.txt", "two");

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) {
    dir.child(name)
        .write_str(content)
        .expect("Failed to write file");
}

pub fn run_tint_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-tint").expect("Failed to find git-tint binary");
    cmd.envs(GIT_ENV);
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd.arg(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(GIT_ENV);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.output()?;
    Ok(String::from_utf8(output.stdout)?)
}
