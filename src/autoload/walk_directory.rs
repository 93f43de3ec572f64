use jwalk::WalkDirGeneric;
use std::fs::File;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;

/// One regular file found under the root directory.
///
/// `relative_subpath` is the directory part of the path relative to the
/// root, empty for files directly under it. `is_readable` is probed once,
/// here, and never re-checked: a file that later changes permissions keeps
/// the readability the walk observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub relative_subpath: String,
    pub file_name: String,
    pub absolute_path: PathBuf,
    pub is_readable: bool,
}

impl ListingEntry {
    /// The lowercased key this entry is matched under. Candidates carry the
    /// namespace path as directories, so in namespaced mode the subpath is
    /// part of the key; otherwise the filename alone is compared.
    pub fn comparison_key(&self, namespaced: bool) -> String {
        if namespaced && !self.relative_subpath.is_empty() {
            format!(
                "{}{}{}",
                self.relative_subpath, MAIN_SEPARATOR, self.file_name
            )
            .to_lowercase()
        } else {
            self.file_name.to_lowercase()
        }
    }
}

// We use jwalk to walk the root directory exactly once and keep everything
// the resolver needs from each entry, which is faster than touching the
// filesystem again on every lookup.
//
// Entries are sorted within each directory so the traversal is a
// deterministic depth-first pre-order; when two files normalize to the same
// comparison key, the one visited first shadows the other, so the order
// has to be stable across runs.
//
// Hidden entries are dropped inside process_read_dir. For a hidden
// directory that removes the whole subtree from the walk instead of asking
// every file underneath it whether it should be skipped.
// https://docs.rs/jwalk/0.8.1/jwalk/struct.WalkDirGeneric.html#method.process_read_dir
pub fn walk_directory(root: &Path) -> Vec<ListingEntry> {
    debug!("Beginning directory walk of {:?}", root);

    let mut entries: Vec<ListingEntry> = Vec::new();

    let walk_dir = WalkDirGeneric::<((), ())>::new(root).sort(true)
        .process_read_dir(|_depth, _path, _read_dir_state, children| {
            children.retain(|dir_entry_result| match dir_entry_result {
                Ok(dir_entry) => {
                    !dir_entry.file_name.to_string_lossy().starts_with('.')
                }
                Err(_) => false,
            });
        });

    for entry in walk_dir {
        let Ok(entry) = entry else {
            // An unreadable root (or an entry that vanished mid-walk) is
            // not an error; it just contributes nothing to the listing.
            continue;
        };

        // Depth 0 is the root itself. Skipping it also covers a root that
        // names a regular file rather than a directory.
        if entry.depth == 0 || entry.file_type.is_dir() {
            continue;
        }

        let absolute_path = entry.path();
        let relative_subpath = absolute_path
            .strip_prefix(root)
            .ok()
            .and_then(Path::parent)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        let is_readable = File::open(&absolute_path).is_ok();

        entries.push(ListingEntry {
            relative_subpath,
            file_name: entry.file_name.to_string_lossy().to_string(),
            absolute_path,
            is_readable,
        });
    }

    debug!("Finished directory walk: {} files", entries.len());

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;
    use std::fs;

    #[test]
    fn test_walk_is_depth_first_and_sorted() {
        let root = test_util::get_absolute_root(test_util::NAMESPACED_APP);
        let entries = walk_directory(&root);

        let relative_paths: Vec<String> = entries
            .iter()
            .map(|e| e.comparison_key(true))
            .collect();

        assert_eq!(
            relative_paths,
            vec!["a.php", "b/b.php", "c/c.php", "sub/bar.php"]
        );
    }

    #[test]
    fn test_subpath_is_empty_for_files_directly_under_root() {
        let root = test_util::get_absolute_root(test_util::NAMESPACED_APP);
        let entries = walk_directory(&root);

        let a = entries.iter().find(|e| e.file_name == "a.php").unwrap();
        assert_eq!(a.relative_subpath, "");
        assert_eq!(a.comparison_key(true), "a.php");
        assert_eq!(a.comparison_key(false), "a.php");
    }

    #[test]
    fn test_missing_root_yields_empty_listing() {
        let entries =
            walk_directory(Path::new("tests/fixtures/does_not_exist"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("visible.php"), "<?php\n").unwrap();
        fs::write(temp_dir.path().join(".hidden.php"), "<?php\n").unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".git/buried.php"), "<?php\n")
            .unwrap();

        let entries = walk_directory(temp_dir.path());
        let file_names: Vec<&str> =
            entries.iter().map(|e| e.file_name.as_str()).collect();

        assert_eq!(file_names, vec!["visible.php"]);
    }

    #[test]
    fn test_comparison_key_is_lowercased_including_subpath() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("Sub")).unwrap();
        fs::write(temp_dir.path().join("Sub/BAR.php"), "<?php\n").unwrap();

        let entries = walk_directory(temp_dir.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comparison_key(true), "sub/bar.php");
    }
}
