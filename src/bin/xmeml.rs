use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xmeml", version)]
struct Cli {
    /// Log decode details (defaulted fields, legacy tags, merged files).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a document and print it as JSON.
    Inspect(InspectArgs),
    /// Decode a document and write it back in canonical form.
    Roundtrip(RoundtripArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input XMEML document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Fail on malformed optional fields instead of defaulting them.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Deepest allowed sequence nesting.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,
}

#[derive(Parser, Debug)]
struct RoundtripArgs {
    /// Input XMEML document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output XMEML path.
    #[arg(long)]
    out: PathBuf,

    /// Spaces per nesting level; 0 writes a single line.
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Roundtrip(args) => cmd_roundtrip(args),
    }
}

fn read_document(path: &Path, opts: &xmeml::DecodeOptions) -> anyhow::Result<xmeml::Document> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let doc = xmeml::decode_with(&bytes, opts)
        .with_context(|| format!("decode '{}'", path.display()))?;
    Ok(doc)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let opts = xmeml::DecodeOptions {
        strict: args.strict,
        max_depth: args.max_depth,
        ..xmeml::DecodeOptions::default()
    };
    let doc = read_document(&args.in_path, &opts)?;
    let json = serde_json::to_string_pretty(&doc).with_context(|| "serialize document JSON")?;
    println!("{json}");
    Ok(())
}

fn cmd_roundtrip(args: RoundtripArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, &xmeml::DecodeOptions::default())?;
    let opts = xmeml::EncodeOptions {
        indent: args.indent,
        ..xmeml::EncodeOptions::default()
    };
    let bytes = xmeml::encode_with(&doc, &opts);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
