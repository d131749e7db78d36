use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Duration,
};

use alpha::{Outcome, Session, SuppliedInputs, Watchdog, execute};
use clap::Parser;
use log::info;

/// alpha is a tiny scripting language whose programs can pause for input and
/// resume by replay.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells alpha to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Supplies a value for an input statement, as NAME=VALUE. May be repeated;
    /// values for the same name are used in the order given.
    #[arg(short, long = "input", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    inputs: Vec<(String, String)>,

    /// Prompts on the terminal whenever the program waits for input, then
    /// replays it with the new value.
    #[arg(long, conflicts_with = "json")]
    interactive: bool,

    /// Prints the response body a host would send instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Wall-clock limit for each run, in milliseconds. 0 disables it.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Maximum number of statements and loop iterations per run.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Prints the token list and exits.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed program, with every operation parenthesized, and
    /// exits.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
       .map(|(name, value)| (name.trim().to_string(), value.to_string()))
       .filter(|(name, _)| !name.is_empty())
       .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    if args.tokens || args.ast {
        return inspect(&script, args.tokens);
    }

    let mut watchdog = watchdog_from(&args);

    if args.interactive {
        return interactive(&script, args.inputs, &mut watchdog);
    }

    let mut inputs: SuppliedInputs = args.inputs.into_iter().collect();
    let outcome = execute(&script, &mut inputs, &mut watchdog);

    if args.json {
        return match outcome.to_json() {
            Ok(body) => {
                println!("{body}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    for line in outcome.output() {
        println!("{line}");
    }
    report(&outcome)
}

fn watchdog_from(args: &Args) -> Watchdog {
    let mut watchdog = Watchdog::unbounded();
    if args.timeout_ms > 0 {
        watchdog = watchdog.with_timeout(Duration::from_millis(args.timeout_ms));
    }
    if let Some(steps) = args.max_steps {
        watchdog = watchdog.with_max_steps(steps);
    }
    watchdog
}

fn inspect(script: &str, tokens: bool) -> ExitCode {
    let result = if tokens {
        alpha::tokenize(script).map(|tokens| {
                                   for (token, line) in tokens {
                                       println!("{line:>4}  {token}");
                                   }
                               })
    } else {
        alpha::parse(script).map(|program| print!("{program}"))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Plays the host: runs the program, asks for each missing value and replays
/// until the program is done. Only output not shown by an earlier round is
/// printed.
fn interactive(script: &str, preset: Vec<(String, String)>, watchdog: &mut Watchdog) -> ExitCode {
    let mut session = Session::new(script);
    for (name, value) in preset {
        session.provide(name, value);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut shown = 0;

    loop {
        let outcome = session.resume(watchdog);
        for line in outcome.output().iter().skip(shown) {
            println!("{line}");
        }
        shown = outcome.output().len();

        let Outcome::Paused { needed, .. } = &outcome else {
            return report(&outcome);
        };

        eprint!("{needed} = ");
        if let Err(e) = io::stderr().flush() {
            eprintln!("Failed to show the prompt: {e}");
            return ExitCode::FAILURE;
        }

        match lines.next() {
            Some(Ok(value)) => {
                session.provide(needed.clone(), value.trim());
                info!("replaying with {} supplied values", session.journal().len());
            },
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                eprintln!("Input closed while waiting for '{needed}'.");
                return ExitCode::FAILURE;
            },
        }
    }
}

fn report(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Completed { .. } => ExitCode::SUCCESS,
        Outcome::Paused { needed, .. } => {
            eprintln!("Waiting for input '{needed}'. Supply it with --input {needed}=VALUE.");
            ExitCode::from(2)
        },
        Outcome::Failed { error, .. } => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
