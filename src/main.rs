use std::fs;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use easel::tree_walk::{parse, tokenize};
use easel::{prelude, run};

struct Args {
    script: Option<String>,
    debug: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        script: None,
        debug: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--debug" {
            args.debug = true;
        } else if args.script.is_none() {
            args.script = Some(arg);
        }
    }
    args
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args();
    let Some(path) = args.script else {
        println!("usage: easel <script> [--debug]");
        return ExitCode::SUCCESS;
    };

    match execute(&path, args.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn execute(path: &str, debug: bool) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|err| format!("could not read {path}: {err}"))?;

    let tokens = tokenize(&source).map_err(|err| err.to_string())?;
    debug!(tokens = tokens.len(), "tokenized {path}");
    if debug {
        dump("tokens_output.json", &tokens)?;
    }

    let program = parse(tokens).map_err(|err| err.to_string())?;
    debug!(statements = program.len(), "parsed {path}");
    if debug {
        dump("ast_output.json", &program)?;
    }

    run(&program, &prelude()).map_err(|err| err.to_string())
}

fn dump<T: serde::Serialize>(path: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| format!("could not serialize {path}: {err}"))?;
    fs::write(path, json).map_err(|err| format!("could not write {path}: {err}"))
}
