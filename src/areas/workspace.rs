use std::path::Path;

/// The working directory a status report is produced for.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolves `path` against the current directory.
    ///
    /// An empty path means the current directory. When resolution fails the
    /// path is kept as given; it is only used for display and as the child
    /// process working directory, so a bad path surfaces later as a status
    /// failure instead.
    pub fn resolve(path: &Path) -> Self {
        let path = if path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            path
        };

        let resolved = std::path::absolute(path).unwrap_or_else(|err| {
            tracing::debug!(path = %path.display(), %err, "keeping unresolved path");
            path.to_path_buf()
        });

        Workspace::new(resolved.into_boxed_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
