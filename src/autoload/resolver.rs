use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error};

use crate::autoload::candidates;
use crate::autoload::configuration::Configuration;
use crate::autoload::loader::{Loader, SourceFileLoader};
use crate::autoload::walk_directory::{walk_directory, ListingEntry};

/// What one lookup amounted to. The hook-facing `resolve` discards this,
/// but keeping the distinctions explicit lets tests (and the CLI) assert on
/// why nothing was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A readable file matched and was handed to the loader.
    Loaded(PathBuf),
    /// A file matched but this resolver already loaded it earlier; the
    /// loader was not called again.
    AlreadyLoaded(PathBuf),
    /// A file matched but was not readable when the listing was built.
    /// Matching is terminal, so no further entry was considered.
    FoundUnreadable(PathBuf),
    /// Candidates existed but no listing entry matched any of them.
    NoMatch,
    /// The symbol name produced no candidates (namespaces are required and
    /// the name has fewer than two segments).
    NoCandidates,
}

/// Looks for and loads symbol files. Filename comparison is always
/// case-insensitive and takes the first matching file in traversal order.
///
/// The directory listing is built on the first lookup and reused for the
/// resolver's whole lifetime, so files added afterwards are invisible until
/// a new resolver is constructed. The source tree is assumed static for one
/// process run.
pub struct Resolver {
    configuration: Configuration,
    loader: Box<dyn Loader>,
    listing: OnceCell<Vec<ListingEntry>>,
    loaded_paths: Mutex<HashSet<PathBuf>>,
}

impl Resolver {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_loader(configuration, Box::<SourceFileLoader>::default())
    }

    pub fn with_loader(
        configuration: Configuration,
        loader: Box<dyn Loader>,
    ) -> Self {
        Self {
            configuration,
            loader,
            listing: OnceCell::new(),
            loaded_paths: Mutex::new(HashSet::new()),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The cached listing, built on first use. `OnceCell` guards the
    /// build-once transition, so concurrent first lookups cannot race to
    /// build it twice or observe it half built.
    pub fn directory_listing(&self) -> &[ListingEntry] {
        self.listing
            .get_or_init(|| {
                walk_directory(&self.configuration.root_directory)
            })
            .as_slice()
    }

    /// Hook-shaped entry point for the host runtime's "symbol not found"
    /// callback: never returns a value and never surfaces an error. A
    /// lookup that finds nothing is a normal, silent outcome; the host is
    /// expected to raise its own error afterwards if the symbol still does
    /// not exist. Loader failures are logged and swallowed here.
    pub fn resolve(&self, symbol_name: &str) {
        match self.try_resolve(symbol_name) {
            Ok(resolution) => {
                debug!("Resolved {:?}: {:?}", symbol_name, resolution)
            }
            Err(err) => error!("Failed loading {:?}: {:#}", symbol_name, err),
        }
    }

    /// Same lookup as `resolve`, reporting the outcome. The resolver itself
    /// never produces an `Err`; the only errors returned are the loader's.
    pub fn try_resolve(
        &self,
        symbol_name: &str,
    ) -> anyhow::Result<Resolution> {
        let candidates =
            candidates::generate(&self.configuration, symbol_name);
        if candidates.is_empty() {
            return Ok(Resolution::NoCandidates);
        }

        debug!("Candidates for {:?}: {:?}", symbol_name, candidates);

        let namespaced = self.configuration.uses_namespaces;
        for entry in self.directory_listing() {
            if !candidates.contains(&entry.comparison_key(namespaced)) {
                continue;
            }

            // First match in traversal order is terminal, readable or not.
            // An unreadable match deliberately does not fall through to a
            // later file with the same key.
            if !entry.is_readable {
                return Ok(Resolution::FoundUnreadable(
                    entry.absolute_path.clone(),
                ));
            }

            return self.load_once(&entry.absolute_path);
        }

        Ok(Resolution::NoMatch)
    }

    // Include-once semantics: each absolute path goes to the loader at most
    // once per resolver lifetime, no matter how many symbols resolve to it.
    fn load_once(&self, absolute_path: &Path) -> anyhow::Result<Resolution> {
        let mut loaded_paths = self
            .loaded_paths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !loaded_paths.insert(absolute_path.to_path_buf()) {
            return Ok(Resolution::AlreadyLoaded(absolute_path.to_path_buf()));
        }

        self.loader.load(absolute_path)?;
        Ok(Resolution::Loaded(absolute_path.to_path_buf()))
    }
}
