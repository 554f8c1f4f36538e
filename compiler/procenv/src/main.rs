//! procenv CLI

use std::io;
use std::process::ExitCode;

use procenv::commands::{
    check_files, explain_error, facts_file, lex_file, parse_check_args, parse_inspect_args,
    tree_file,
};
use procenv::EnvSnapshot;
use procenv_diagnostic::emitter::{ColorMode, TerminalEmitter};

fn main() -> ExitCode {
    procenv::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let ok = match args[1].as_str() {
        "check" => {
            let (options, files) = match parse_check_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    print_check_usage();
                    return ExitCode::FAILURE;
                }
            };
            let env = EnvSnapshot::from_process();
            let mut emitter = TerminalEmitter::stderr(options.color);
            let summary = check_files(&files, &env, &options, &mut emitter, &mut io::stdout());
            summary.is_success(options.deny_warnings)
        }
        "lex" | "tree" | "facts" => {
            let command = args[1].as_str();
            let switch = match command {
                "lex" => Some("--canonical"),
                "facts" => Some("--json"),
                _ => None,
            };
            let inspect = match parse_inspect_args(&args[2..], switch) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    match switch {
                        Some(flag) => eprintln!("Usage: procenv {command} <file.d.ts> [{flag}]"),
                        None => eprintln!("Usage: procenv {command} <file.d.ts>"),
                    }
                    return ExitCode::FAILURE;
                }
            };
            let mut emitter = TerminalEmitter::stderr(ColorMode::Auto);
            let mut out = io::stdout();
            match command {
                "lex" => lex_file(&inspect.path, inspect.switch, &mut emitter, &mut out),
                "tree" => tree_file(&inspect.path, &mut emitter, &mut out),
                _ => facts_file(&inspect.path, inspect.switch, &mut emitter, &mut out),
            }
        }
        "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: procenv explain <code>");
                eprintln!("Example: procenv explain E3001");
                return ExitCode::FAILURE;
            };
            explain_error(code, &mut io::stdout(), &mut io::stderr())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("procenv {}", env!("CARGO_PKG_VERSION"));
            true
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            false
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    println!("procenv - validate the environment against a ProcessEnv declaration");
    println!();
    println!("Usage: procenv <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <files...>     Check the current environment against declaration files");
    println!("  lex <file>           Print the token stream (--canonical for source form)");
    println!("  tree <file>          Print the scope tree");
    println!("  facts <file>         Print the recovered facts (--json for JSON)");
    println!("  explain <code>       Explain a diagnostic code");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=procenv=debug) for trace output.");
}

fn print_check_usage() {
    eprintln!("Usage: procenv check <file.d.ts>... [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scope=<name>          Expected `declare` scope (default: global)");
    eprintln!("  --namespace=<name>      Expected namespace (default: NodeJS)");
    eprintln!("  --interface=<name>      Expected interface (default: ProcessEnv)");
    eprintln!("  --color=<mode>          auto, always, or never");
    eprintln!("  --deny-warnings         Fail when optional variables are missing");
}
