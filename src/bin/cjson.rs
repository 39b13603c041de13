use std::path::PathBuf;
use std::process;

use canonjson::Formatter;
use clap::Parser;

/// Prettifies JSON files.
///
/// cjson rewrites a JSON file in place: object keys are sorted at every
/// nesting level, indentation is normalized to 2 spaces, and the file ends
/// with a single trailing newline. The document's meaning is never changed.
#[derive(Parser, Debug)]
#[command(name = "cjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// The json file to prettify.
    #[arg(value_name = "JSON_FILE")]
    json_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("cjson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = Formatter::new();
    formatter.reformat_file(&args.json_file)?;
    Ok(())
}
