use std::{fs, thread};

use clap::Parser;
use log::{LevelFilter, debug, error};
use monkey::{
    interpreter::{evaluator::core::Evaluator, parser::core::Parser as SourceParser},
    run,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// Programs can recurse as deep as this stack allows.
const INTERPRETER_STACK_SIZE: usize = 64 * 1024 * 1024;

const PROMPT: &str = ">> ";

/// monkey is a small dynamically-typed scripting language.
///
/// Without any contents, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the last statement of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn init_logger(verbose: u8) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new().format(|out, message, record| {
                              out.finish(format_args!("[{}] [{}] {}",
                                                      record.level(),
                                                      record.target(),
                                                      message));
                          })
                          .level(level)
                          .chain(std::io::stderr())
                          .apply()?;
    Ok(())
}

/// Reads lines until end of input, evaluating each one against the same
/// evaluator.
fn repl() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut evaluator = Evaluator::new();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            debug!("history entry not added: {e}");
        }

        let mut parser = SourceParser::new(&line);
        let program = parser.parse();
        if let Err(errors) = parser.report_errors() {
            println!("{errors}");
            continue;
        }

        match evaluator.evaluate(&program) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn execute(args: Args) -> i32 {
    let Some(contents) = args.contents else {
        return match repl() {
            Ok(()) => 0,
            Err(e) => {
                error!("line editor failed: {e}");
                1
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return 1;
            },
        }
    } else {
        contents
    };

    match run(&script, args.pipe_mode) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{e}");
            1
        },
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let interpreter = thread::Builder::new().name("interpreter".to_string())
                                            .stack_size(INTERPRETER_STACK_SIZE)
                                            .spawn(move || execute(args));

    let code = match interpreter.map(thread::JoinHandle::join) {
        Ok(Ok(code)) => code,
        Ok(Err(_)) => {
            eprintln!("The interpreter thread panicked.");
            101
        },
        Err(e) => {
            eprintln!("Failed to start the interpreter thread: {e}");
            1
        },
    };

    std::process::exit(code);
}
