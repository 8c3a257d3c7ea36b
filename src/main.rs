// dekhao-cpp: dekhao script → C++ transpiler

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use dekhao_cpp::{dump_tokens, generate, parse, tokenize};

const DEFAULT_OUTPUT: &str = "generated.cpp";

#[derive(Parser, Debug)]
#[command(name = "dekhao-cpp", version, about = "dekhao to C++ transpiler")]
struct Args {
    /// Source file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write the C++ program to a file instead of stdout. Without a value
    /// the input path with a `.cpp` extension is used.
    #[arg(short, long, num_args = 0..=1, value_name = "FILE")]
    output: Option<Option<PathBuf>>,

    /// Print the token dump before the generated code
    #[arg(long)]
    tokens: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(2 + args.verbose as usize)
        .init()?;

    let source = read_source(args.input.as_deref())?;
    let name = display_name(args.input.as_deref());

    let tokens = tokenize(&source).with_context(|| format!("{}: nothing to transpile", name))?;
    if args.tokens {
        println!("Tokens:");
        println!("{}", dump_tokens(&tokens));
    }

    let statements = parse(&tokens);
    if statements.is_empty() {
        log::warn!("{}: no print or declaration lines recognized", name);
    }
    let cpp = generate(&statements).to_string();

    match args.output {
        None => print!("{}", cpp),
        Some(path) => {
            let out_path = path.unwrap_or_else(|| default_output(args.input.as_deref()));
            fs::write(&out_path, &cpp)
                .with_context(|| format!("Cannot write '{}'", out_path.display()))?;
            log::info!("Wrote {}", out_path.display());
        }
    }

    Ok(())
}

fn read_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Cannot read stdin")?;
            Ok(source)
        }
    }
}

fn display_name(input: Option<&Path>) -> String {
    input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}

fn default_output(input: Option<&Path>) -> PathBuf {
    input
        .map(|p| p.with_extension("cpp"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}
