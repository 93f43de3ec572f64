pub(crate) mod candidates;
pub mod cli;
pub mod configuration;
pub(crate) mod inflector;
pub mod loader;
pub mod logger;
pub mod raw_configuration;
pub mod resolver;
pub mod walk_directory;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use loader::{Loader, SourceFileLoader};
pub use resolver::{Resolution, Resolver};
pub use walk_directory::ListingEntry;

/// The separator between namespace segments in a symbol name, as supplied by
/// the host runtime.
pub const NAMESPACE_SEPARATOR: char = '\\';
