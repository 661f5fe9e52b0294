//! gmd - check grammar files and show what's wrong with them.

mod check;
mod tree;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const FILES_HELP: &str =
    "The grammar files to check. If no file is provided, stdin is read.";

/// Check grammarkdown grammar files.
#[derive(Debug, Parser)]
#[clap(name = "gmd", version, about)]
pub struct Args {
    #[clap(value_name = "FILE", help = FILES_HELP)]
    files: Vec<PathBuf>,

    /// Print diagnostics one per line, without colour or source excerpts.
    #[clap(long)]
    plain: bool,

    /// Print the tree of each file after parsing it.
    #[clap(long)]
    tree: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(directive_for_verbosity(args.verbose))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let has_errors = check::run(&args)?;

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}

fn directive_for_verbosity(v: u64) -> &'static str {
    match v {
        0 => "gmd=warn,syntax=warn,scanner=warn",
        1 => "gmd=debug,syntax=debug,scanner=debug",
        _ => "gmd=trace,syntax=trace,scanner=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(
            directive_for_verbosity(0),
            "gmd=warn,syntax=warn,scanner=warn"
        );
        assert_eq!(
            directive_for_verbosity(1),
            "gmd=debug,syntax=debug,scanner=debug"
        );
        assert_eq!(
            directive_for_verbosity(5),
            "gmd=trace,syntax=trace,scanner=trace"
        );
    }

    #[test]
    fn args_parse() {
        let command_line = ["gmd", "--plain", "-vv", "a.grammar", "b.grammar"];
        let args = Args::try_parse_from(command_line).unwrap();
        assert!(args.plain);
        assert!(!args.tree);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.files.len(), 2);
    }
}
