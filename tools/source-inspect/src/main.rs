use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use source_inspect::config::InspectorConfig;
use source_inspect::OutputFormat;

#[derive(Parser)]
#[command(name = "source-inspect", about = "Smoke-check the Functions source for expected markers")]
struct Cli {
    /// Directory the artifact path is resolved against (defaults to cwd)
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Print check outcomes as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.root_dir {
        Some(dir) => InspectorConfig::from_root(&dir),
        None => match InspectorConfig::current() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: could not determine working directory: {e}");
                process::exit(1);
            }
        },
    };

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let stdout = io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut out = stdout.lock();
    if let Err(e) = source_inspect::run(&config, format, color, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
