use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use flow2hx::source::{DEFAULT_LOCAL, DEFAULT_VERSION_TAG};
use flow2hx::{Source, Translator};

/// Generates Haxe GraphQL AST typedefs from the Flow definitions of graphql-js.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Which copy of ast.js to translate
    #[arg(long, value_enum, default_value_t = SourceKind::Remote, env = "FLOW2HX_SOURCE")]
    source: SourceKind,

    /// graphql-js release tag used with the remote source
    #[arg(long, default_value = DEFAULT_VERSION_TAG, env = "FLOW2HX_TAG")]
    tag: String,

    /// URL or path of the local copy
    #[arg(long, default_value = DEFAULT_LOCAL, env = "FLOW2HX_LOCAL")]
    local: String,

    /// Fail if any rewrite rule matched nothing
    #[arg(long)]
    strict: bool,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SourceKind {
    Remote,
    Local,
}

impl Args {
    fn source(&self) -> Source {
        match self.source {
            SourceKind::Remote => Source::remote(&self.tag),
            SourceKind::Local => Source::local(&self.local),
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let source = args.source();
    info!("translating {}", source);

    let haxe = Translator::new()?
        .strict(args.strict)
        .translate_source(&source)
        .with_context(|| format!("failed to translate {}", source))?;

    io::stdout()
        .lock()
        .write_all(haxe.as_bytes())
        .context("failed to write output")?;
    Ok(())
}
