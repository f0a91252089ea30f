use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeparatorArg {
    Equals,
    Colon,
}

#[derive(Parser, Debug)]
#[command(
    name = "initool",
    about = "Parse an INI file and print it back in canonical form",
    version
)]
struct Args {
    /// Fail on input the parser cannot read instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Assignment operator written between key and value
    #[arg(long, value_enum, default_value_t = SeparatorArg::Equals)]
    separator: SeparatorArg,

    /// Print the parsed document as JSON instead of INI
    #[arg(long)]
    json: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (an unreadable file is treated as empty)
    #[arg(default_value = "./test.ini")]
    input: PathBuf,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let separator = match args.separator {
        SeparatorArg::Equals => initool::Separator::Equals,
        SeparatorArg::Colon => initool::Separator::Colon,
    };
    let options = initool::Options {
        strict: args.strict,
        separator,
    };

    let text = initool::load_file(&args.input);
    let doc = initool::decode_from_str(&text, &options)?;
    info!(path = %args.input.display(), sections = doc.len(), "parsed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", initool::encode_to_string(&doc, &options));
    }

    Ok(())
}
