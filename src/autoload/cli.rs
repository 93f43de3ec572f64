use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::autoload::logger::install_logger;
use crate::autoload::raw_configuration;
use crate::autoload::resolver::{Resolution, Resolver};

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve each symbol name to a file and load it
    Resolve {
        #[clap(required = true)]
        symbols: Vec<String>,
    },
    /// Print the files the resolver would scan, in traversal order
    ListFiles,
}

/// A CLI to resolve symbol names to source files by naming convention
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path for the topmost directory to search
    #[arg(long, default_value = ".")]
    root_directory: PathBuf,

    /// File extension, including the leading dot (overrides .autoload.yml)
    #[arg(long)]
    file_extension: Option<String>,

    /// Filename prefix to require; repeat for more than one, in search
    /// order (overrides .autoload.yml)
    #[arg(long = "file-prefix")]
    file_prefixes: Vec<String>,

    /// Convert camelCase/PascalCase symbol names to snake_case
    #[arg(long)]
    snake_case: bool,

    /// Replace underscores with dashes in symbol names
    #[arg(long)]
    dash_for_underscore: bool,

    /// Require namespaced symbols, mirrored in the directory structure
    #[arg(long)]
    namespaces: bool,

    /// Drop the topmost namespace segment (implies --namespaces)
    #[arg(long)]
    strip_root_namespace: bool,

    /// Print debug output
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn absolute_root_directory(&self) -> Result<PathBuf, std::io::Error> {
        self.root_directory.canonicalize()
    }
}

pub fn run() {
    let args = Args::parse();
    install_logger(args.debug);

    let absolute_root = args
        .absolute_root_directory()
        .expect("Issue getting absolute root_directory!");

    let mut raw = raw_configuration::get(&absolute_root)
        .expect("Issue reading .autoload.yml!");

    if let Some(file_extension) = &args.file_extension {
        raw.file_extension = file_extension.clone();
    }
    if !args.file_prefixes.is_empty() {
        raw.file_prefixes = args.file_prefixes.clone();
    }
    raw.snake_case |= args.snake_case;
    raw.underscore_to_dash |= args.dash_for_underscore;
    raw.namespaces |= args.namespaces || args.strip_root_namespace;
    raw.strip_root_namespace |= args.strip_root_namespace;

    let resolver = Resolver::new(raw.into_configuration(&absolute_root));

    match args.command {
        Command::Resolve { symbols } => {
            // Lookups share the cached listing, so resolving many symbols
            // in parallel only walks the directory once.
            let outcomes: Vec<String> = symbols
                .par_iter()
                .map(|symbol| describe(&resolver, symbol))
                .collect();
            for outcome in outcomes {
                println!("{}", outcome);
            }
        }
        Command::ListFiles => {
            for entry in resolver.directory_listing() {
                if entry.relative_subpath.is_empty() {
                    println!("{}", entry.file_name);
                } else {
                    println!(
                        "{}{}{}",
                        entry.relative_subpath,
                        MAIN_SEPARATOR,
                        entry.file_name
                    );
                }
            }
        }
    }
}

fn describe(resolver: &Resolver, symbol: &str) -> String {
    match resolver.try_resolve(symbol) {
        Ok(Resolution::Loaded(path))
        | Ok(Resolution::AlreadyLoaded(path)) => {
            format!("{:?} is defined at {:?}", symbol, path)
        }
        Ok(Resolution::FoundUnreadable(path)) => {
            format!("{:?} matched unreadable file {:?}", symbol, path)
        }
        Ok(Resolution::NoMatch) | Ok(Resolution::NoCandidates) => {
            format!("Could not resolve {:?}", symbol)
        }
        Err(err) => format!("Failed loading {:?}: {:#}", symbol, err),
    }
}
