use clap::Parser;
use log::{error, info, LevelFilter};
use pokedex::commands::{report_error, HELP};
use pokedex::{load_roster, starter_roster, AppConfig, CommandError, Output, Pokedex, Session};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn main() -> ExitCode {
    let config = AppConfig::parse();

    if let Err(e) = init_logger(config.log_level) {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }

    let roster = match &config.roster {
        Some(path) => load_roster(path),
        None => starter_roster(),
    };
    let pokedex = match roster.map_err(|e| e.to_string()).and_then(|records| {
        Pokedex::from_roster(records).map_err(|e| e.to_string())
    }) {
        Ok(pokedex) => pokedex,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error loading roster: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Pokedex ready with {} Pokemon", pokedex.count_total());

    println!("Welcome to the Pokedex! Enter a command, or ? for help.");
    let mut session = Session::new(pokedex);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("Enter command: ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        }

        match session.run_line(&line) {
            Ok(Output::Text(text)) => println!("{}", text),
            Ok(Output::Silent) => {}
            Ok(Output::Quit) => break,
            Err(e) => {
                println!("{}", report_error(&line, &e));
                if matches!(e, CommandError::UnknownCommand(_)) {
                    println!("{}", HELP);
                }
            }
        }
    }

    println!();
    ExitCode::SUCCESS
}
