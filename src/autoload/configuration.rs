use std::path::{Path, PathBuf};

/// The naming-convention rules one `Resolver` operates under.
///
/// Built once through `ConfigurationBuilder` and read-only afterwards, so a
/// resolver can never be reconfigured halfway through its lifetime while its
/// directory listing stays cached from before the change.
///
/// No field is validated: an extension without a leading dot, a prefix
/// containing a path separator, or a root that does not exist are all
/// accepted and simply never match anything. Resolution is best effort by
/// design, so bad configuration shows up as "nothing was loaded" rather than
/// as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The topmost directory where the file search begins.
    pub root_directory: PathBuf,

    /// File extension, including the leading dot. Example: ".class.php"
    pub file_extension: String,

    /// Filename prefixes to try, in order, already lowercased. When empty
    /// the resolver behaves as if the single prefix `""` were configured.
    pub file_prefixes: Vec<String>,

    /// Whether symbol names are camelCase/PascalCase and should be converted
    /// to snake_case before filename comparison.
    pub uses_snake_case: bool,

    /// Whether underscores in the (possibly snake_cased) symbol name are
    /// replaced with dashes.
    pub underscore_to_dash: bool,

    /// Whether symbols are required to be namespaced, with the namespace
    /// path mirrored in the directory structure.
    pub uses_namespaces: bool,

    /// Whether the topmost namespace segment is dropped before building the
    /// candidate path. Only meaningful when `uses_namespaces` is set.
    pub strip_root_namespace: bool,
}

pub const DEFAULT_FILE_EXTENSION: &str = ".php";

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// The prefixes to iterate when generating candidates. An empty prefix
    /// list means "no prefix required", which the candidate builder treats
    /// as the single empty prefix.
    pub(crate) fn prefixes_or_default(&self) -> Vec<&str> {
        if self.file_prefixes.is_empty() {
            vec![""]
        } else {
            self.file_prefixes.iter().map(String::as_str).collect()
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::default().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    root_directory: Option<PathBuf>,
    file_extension: Option<String>,
    file_prefixes: Vec<String>,
    uses_snake_case: bool,
    underscore_to_dash: bool,
    uses_namespaces: bool,
    strip_root_namespace: bool,
}

impl ConfigurationBuilder {
    /// Sets the topmost directory where recursion should begin. Defaults to
    /// the current directory.
    pub fn root_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.root_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the extension for filenames to examine. Must include the leading
    /// dot.
    pub fn file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = Some(ext.into());
        self
    }

    /// Equivalent to `file_prefixes([prefix])`.
    pub fn file_prefix(self, prefix: impl Into<String>) -> Self {
        self.file_prefixes(vec![prefix.into()])
    }

    /// Sets the prefixes for filenames to examine, replacing any previously
    /// set. Each is lowercased here, once, so candidate generation never has
    /// to case-fold them again.
    pub fn file_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_prefixes = prefixes
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        self
    }

    /// Assumes symbol names are camelCase or PascalCase and converts them to
    /// snake_case before comparison.
    pub fn snake_case(mut self, use_dashes: bool) -> Self {
        self.uses_snake_case = true;
        if use_dashes {
            self.underscore_to_dash = true;
        }
        self
    }

    /// Replaces underscores with dashes in symbol names.
    pub fn dash_for_underscore(mut self) -> Self {
        self.underscore_to_dash = true;
        self
    }

    /// Requires symbols to be namespaced, with the namespace path mirrored
    /// in the directory structure under the root.
    pub fn namespaces(mut self, strip_root: bool) -> Self {
        self.uses_namespaces = true;
        self.strip_root_namespace = strip_root;
        self
    }

    pub fn build(self) -> Configuration {
        Configuration {
            root_directory: self
                .root_directory
                .unwrap_or_else(|| PathBuf::from(".")),
            file_extension: self
                .file_extension
                .unwrap_or_else(|| DEFAULT_FILE_EXTENSION.to_string()),
            file_prefixes: self.file_prefixes,
            uses_snake_case: self.uses_snake_case,
            underscore_to_dash: self.underscore_to_dash,
            uses_namespaces: self.uses_namespaces,
            strip_root_namespace: self.strip_root_namespace,
        }
    }
}
