use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The external collaborator that makes a resolved file's symbols available
/// to the host runtime.
///
/// The resolver guarantees `load` is called at most once per absolute path
/// per process lifetime, so implementations do not need their own
/// include-once bookkeeping.
pub trait Loader: Send + Sync {
    fn load(&self, absolute_path: &Path) -> anyhow::Result<()>;
}

/// Default loader: reads the file's contents so a host embedding can take
/// over from there. A real host registers its own `Loader` that feeds the
/// source to its interpreter.
#[derive(Debug, Default)]
pub struct SourceFileLoader;

impl Loader for SourceFileLoader {
    fn load(&self, absolute_path: &Path) -> anyhow::Result<()> {
        let contents = fs::read(absolute_path).with_context(|| {
            format!("Failed to read {}", absolute_path.display())
        })?;
        debug!(
            "Loaded {} ({} bytes)",
            absolute_path.display(),
            contents.len()
        );
        Ok(())
    }
}
