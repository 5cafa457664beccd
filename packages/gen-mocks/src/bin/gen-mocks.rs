//! gen-mocks CLI
//!
//! Generates mock implementations of Go interfaces.
//!
//! # Usage
//!
//! ```bash
//! # Preview mocks for every *Service interface of a package directory
//! gen-mocks -p ./internal/svc
//!
//! # Write mocks for package `svc` of an import path into ./svc
//! gen-mocks -p github.com/acme/app/svc -w
//!
//! # Custom interface pattern and output location
//! gen-mocks -p ./store -i 'Store$' -o ./store/mocks -w
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gen_mocks::{FileSink, GeneratorConfig, MockGenerator, PreviewSink, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gen-mocks")]
#[command(about = "Generate mock implementations of Go interfaces", long_about = None)]
struct Cli {
    /// Package directory, or import path when it is not a directory
    #[arg(short = 'p', value_name = "PATH")]
    package: String,

    /// Interface name regex (default: names ending in "Service")
    #[arg(short = 'i', value_name = "REGEX")]
    pattern: Option<String>,

    /// Package to pick and package clause of the generated files
    #[arg(short = 'n', value_name = "NAME")]
    name: Option<String>,

    /// Output directory (default: "." for a directory, "svc" for an import path)
    #[arg(short = 'o', value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Write files instead of printing them to stdout
    #[arg(short = 'w')]
    write: bool,

    /// Normalize imports with this goimports binary instead of the built-in resolver
    #[arg(long, value_name = "BIN")]
    goimports: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut builder = GeneratorConfig::builder(self.package).write(self.write);
        if let Some(pattern) = self.pattern {
            builder = builder.pattern(pattern);
        }
        if let Some(name) = self.name {
            builder = builder.package_name(name);
        }
        if let Some(dir) = self.out_dir {
            builder = builder.out_dir(dir);
        }
        if let Some(bin) = self.goimports {
            builder = builder.goimports(bin);
        }
        builder.build()
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let write = config.write;
    let generator = MockGenerator::new(config);

    let report = if write {
        let mut sink = FileSink::new();
        generator.run(&mut sink)?
    } else {
        let mut sink = PreviewSink::new(io::stdout().lock());
        generator.run(&mut sink)?
    };
    debug!(
        "{} packages scanned, {} files produced, {} packages without matches",
        report.packages_scanned,
        report.files_written(),
        report.empty_packages.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gen-mocks: {}", err);
            ExitCode::FAILURE
        }
    }
}
