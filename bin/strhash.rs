use clap::Parser;
use corekit::{
    die,
    fatal::{self, SinkKind},
    util,
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Parser)]
#[command(name = "strhash", version)]
struct Args {
    /// Strings to hash, or file paths with --files
    inputs: Vec<String>,
    /// Hash every line of each input file
    #[arg(long)]
    files: bool,
    /// Also print the canonical first-to-last FNV-1a value
    #[arg(long)]
    forward: bool,
    /// Where fatal errors are reported: console, dialog or log
    #[arg(long, env = "COREKIT_ERROR_SINK")]
    sink: Option<SinkKind>,
}

fn print_hash(input: &[u8], forward: bool) {
    let text = String::from_utf8_lossy(input);
    if forward {
        println!("{:08x} {:08x} {}", util::hash_bytes(input), util::fnv1a(input), text);
    } else {
        println!("{:08x} {}", util::hash_bytes(input), text);
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
    let args = Args::parse();

    fatal::install_sink(args.sink.unwrap_or_else(SinkKind::platform_default));

    if !args.files {
        for input in &args.inputs {
            print_hash(input.as_bytes(), args.forward);
        }
        return Ok(());
    }

    for file in args.inputs {
        log::info!("Hashing lines of {}", file);
        let contents = match tokio::fs::read(&file).await {
            Ok(contents) => contents,
            Err(err) => die!("cannot read {}: {}", file, err),
        };
        for line in util::lines(&contents) {
            print_hash(line, args.forward);
        }
    }

    Ok(())
}
