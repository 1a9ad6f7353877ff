#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use tracing::warn;

use specfold_core::Options;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = AppArgs::parse().context("parsing arguments")?;
    if args.debug {
        println!("DEBUG MODE ON");
    }

    run_once(&args)?;

    if args.watch {
        watch(&args).await?;
    }
    Ok(())
}

/// Runs the whole merge pipeline once and prints its outcome.
fn run_once(args: &AppArgs) -> Result<()> {
    let report = specfold_core::run(&args.options)?;

    if report.cleaned {
        if args.debug {
            for reference in &report.unused {
                println!("WARN:UNUSED:{reference}");
            }
        }
        println!("Removed unused references");
    }
    println!("Generated `{}`", report.output.display());
    Ok(())
}

/// Polls the base file for modification and re-runs the pipeline on change.
///
/// Runs never overlap: each re-run completes before the next poll. Ctrl-C
/// ends the wait cleanly; a pipeline failure during a re-run propagates and
/// aborts the process.
async fn watch(args: &AppArgs) -> Result<()> {
    let base_file = &args.options.base_file;
    println!("Watching for changes in file `{}`", base_file.display());

    let mut last_modified = modified_at(base_file);
    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {
                let modified = modified_at(base_file);
                if modified != last_modified {
                    last_modified = modified;
                    run_once(args)?;
                }
            }
        }
    }

    println!(
        "Stopped watching for changes in file `{}`",
        base_file.display()
    );
    Ok(())
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
}

const HELP: &str = "\
specfold - merge OpenAPI YAML fragments into a single specification

USAGE:
  specfold [OPTIONS]

OPTIONS:
  -d, --debug            Print one WARN:UNUSED line per unused reference
  -c, --cleanup          Remove components never referenced in the output
  -w, --watch            Re-run the pipeline when the base file changes
      --base <FILE>      Base document (default: ./base.yaml)
      --src <DIR>        Directory of schema fragments (default: ./AnixartJS-typeconv)
      --out-dir <DIR>    Destination directory (default: ./public)
      --out-file <NAME>  Output file name (default: openapi.yaml)
  -h, --help             Print this help
";

#[derive(Debug)]
struct AppArgs {
    options: Options,
    debug: bool,
    watch: bool,
}

impl AppArgs {
    fn parse() -> Result<Self> {
        let mut pargs = pico_args::Arguments::from_env();

        if pargs.contains(["-h", "--help"]) {
            print!("{HELP}");
            std::process::exit(0);
        }

        let debug = pargs.contains(["-d", "--debug"]);
        let cleanup = pargs.contains(["-c", "--cleanup"]);
        let watch = pargs.contains(["-w", "--watch"]);

        let base_file: Option<PathBuf> = pargs
            .opt_value_from_str("--base")
            .context("parsing base argument")?;
        let src_dir: Option<PathBuf> = pargs
            .opt_value_from_str("--src")
            .context("parsing src argument")?;
        let dst_dir: Option<PathBuf> = pargs
            .opt_value_from_str("--out-dir")
            .context("parsing out-dir argument")?;
        let file_name: Option<String> = pargs
            .opt_value_from_str("--out-file")
            .context("parsing out-file argument")?;

        let defaults = Options::default();
        let options = Options {
            base_file: base_file.unwrap_or(defaults.base_file),
            src_dir: src_dir.unwrap_or(defaults.src_dir),
            dst_dir: dst_dir.unwrap_or(defaults.dst_dir),
            file_name: file_name.unwrap_or(defaults.file_name),
            cleanup,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(Self {
            options,
            debug,
            watch,
        })
    }
}
