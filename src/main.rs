use std::{fs, io, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser as _;
use env_logger::Env;
use lox_expr::{
    display_error,
    errors::errors::DiagnosticCollector,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Diagnostics were reported
const EXIT_DATA_ERROR: u8 = 65;
/// Input could not be read
const EXIT_NO_INPUT: u8 = 66;

#[derive(clap::Parser, Debug)]
#[command(name = "lox-expr", version, about = "Parse a Lox expression and print its syntax tree")]
struct Args {
    /// File containing the expression; reads stdin when neither this nor --expr is given
    file: Option<PathBuf>,

    /// Expression source given on the command line
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let (source, file_name) = match read_source(&args) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&source, Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::from(EXIT_DATA_ERROR);
        }
    };
    log::debug!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let mut collector = DiagnosticCollector::new();
    let expr = parse(&tokens, &mut collector);
    log::debug!("Parsed in {:?}", parse_start.elapsed());

    for diagnostic in collector.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    if let Some(expr) = expr {
        println!("{}", expr);
    }

    if collector.had_error() {
        ExitCode::from(EXIT_DATA_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

fn read_source(args: &Args) -> io::Result<(String, String)> {
    if let Some(expr) = &args.expr {
        return Ok((expr.clone(), String::from("shell")));
    }

    match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            Ok((source, file_name))
        }
        None => Ok((io::read_to_string(io::stdin())?, String::from("stdin"))),
    }
}
