use std::path::PathBuf;

use anyhow::Context;

use crate::foundation::{core::UserId, error::CartelloResult};

/// Per-user scratch paths under one root directory.
///
/// Both paths are a deterministic function of the user id, so concurrent
/// sessions can never collide on files. The layout mirrors the historical
/// one: `bg_<uid>.png` for the upload, `<uid>.png` for the composite.
#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Wrap a scratch root. The directory is created lazily by [`ensure`].
    ///
    /// [`ensure`]: Workspace::ensure
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the scratch root if it does not exist yet.
    pub fn ensure(&self) -> CartelloResult<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("creating workspace root {}", self.root.display()))?;
        Ok(())
    }

    /// Where the user's uploaded background is stored.
    pub fn background_path(&self, user: UserId) -> PathBuf {
        self.root.join(format!("bg_{user}.png"))
    }

    /// Where the user's rendered composite is stored.
    pub fn output_path(&self, user: UserId) -> PathBuf {
        self.root.join(format!("{user}.png"))
    }

    /// Whether the user uploaded a background in the current session.
    pub fn has_background(&self, user: UserId) -> bool {
        self.background_path(user).exists()
    }

    /// Remove both scratch files for the user. Idempotent: absent files are
    /// not an error, and other IO failures are logged rather than propagated
    /// so terminal transitions always complete.
    pub fn cleanup(&self, user: UserId) {
        for path in [self.background_path(user), self.output_path(user)] {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "workspace cleanup failed");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/workspace.rs"]
mod tests;
