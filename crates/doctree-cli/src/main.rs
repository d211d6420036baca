//! # doctree CLI
//!
//! Renders source trees into static HTML documentation: one page per module,
//! plus an optional index page over the whole package tree.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use doctree::{Extractor, ExtractorConfig, FsReader, Module, Package, PackageScanner, ScanConfig};
use tracing::info;

mod error;

use error::CliError;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Create HTML documentation pages from source module files"
)]
struct Cli {
    /// Input files or directories
    #[clap(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for rendered pages
    #[clap(long, default_value = "documentation")]
    output: PathBuf,

    /// File-name masks to skip (glob syntax)
    #[clap(long, num_args = 0..)]
    ignore: Option<Vec<String>>,

    /// Write an index.html linking all rendered pages
    #[clap(short, long)]
    index: bool,

    /// Include non-public methods and classes
    #[clap(short, long)]
    nonpublic: bool,

    /// Include methods with no docstring
    #[clap(short, long)]
    empty: bool,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let extractor = Extractor::new(ExtractorConfig {
        include_nonpublic: cli.nonpublic,
        include_undocumented: cli.empty,
    });

    let mut config = ScanConfig {
        include_nonpublic: cli.nonpublic,
        ..ScanConfig::default()
    };
    if let Some(masks) = &cli.ignore {
        config.ignore_masks = masks.clone();
    }

    let scanner = PackageScanner::new(Box::new(FsReader), extractor, config)?;
    let container = Package::new(PathBuf::new(), "", "", Vec::new(), Vec::new());
    let tree = scanner.scan_paths(&cli.inputs, container)?;

    let mut pages = 0usize;
    for package in tree.iter() {
        for module in &package.modules {
            let page = doctree_html::render_docpage(module);
            doctree_html::write_page(&page_path(&cli.output, module), &page)?;
            pages += 1;
        }
    }

    if cli.index {
        let page = doctree_html::render_index(&tree);
        doctree_html::write_page(&cli.output.join("index.html"), &page)?;
    }

    info!(pages, "documentation written");
    Ok(())
}

/// Output location for a module's page: its tree path with `.html` appended
///
/// Modules recorded with absolute paths (explicit files outside the scanned
/// roots) fall back to their file name so the page stays under the output
/// directory.
fn page_path(output: &Path, module: &Module) -> PathBuf {
    let rel: &Path = if module.path.is_absolute() {
        Path::new(&module.name)
    } else {
        &module.path
    };
    let joined = output.join(rel);
    PathBuf::from(format!("{}.html", joined.display()))
}
