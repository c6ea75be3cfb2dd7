//! Generates `structure.json` from a content directory.
//!
//! ```text
//! gen-structure --src content --output structure.json
//! gen-structure --watch --interval 2
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;
    use std::time::Duration;

    use clap::Parser;
    use docshelf::scan::{self, ScanError, WatchReport};

    /// Generate the docshelf file manifest
    #[derive(Parser, Debug)]
    #[command(name = "gen-structure", version, about)]
    struct Args {
        /// Content directory to scan
        #[arg(long, default_value = "content")]
        src: PathBuf,

        /// Manifest file to write
        #[arg(long, default_value = "structure.json")]
        output: PathBuf,

        /// Keep running and regenerate when the content changes
        #[arg(long)]
        watch: bool,

        /// Seconds between checks in watch mode
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    }

    fn generate(src: &Path, output: &Path) -> Result<(), ScanError> {
        let count = scan::generate(src, output)?;
        println!("Generated {} ({count} entries)", output.display());
        Ok(())
    }

    fn watch(args: &Args) -> Result<(), ScanError> {
        println!(
            "Watching {} every {}s (Ctrl+C to stop)",
            args.src.display(),
            args.interval
        );
        scan::watch(
            &args.src,
            &args.output,
            Duration::from_secs(args.interval),
            |report| match report {
                WatchReport::Regenerated(count) => {
                    println!("Change detected, regenerated {} ({count} entries)", args.output.display());
                }
                WatchReport::Failed(e) => eprintln!("Error: {e}"),
            },
        )
    }

    pub fn run() -> ExitCode {
        let args = Args::parse();

        let result = generate(&args.src, &args.output).and_then(|()| {
            if args.watch { watch(&args) } else { Ok(()) }
        });

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
