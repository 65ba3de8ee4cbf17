use calc_rust::config::Config;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const USAGE: &str = "usage: calc-rust [-i | -f <file> | -e <expression>]";
const EXIT_USAGE: i32 = 64;

fn main() -> DynResult {
    let dotenv = dotenvy::dotenv();
    // unrecognized characters are reported at `warn`
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let config = Config::from_env();
    debug!("{:?}", config);

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let args = args.iter().map(String::as_str).collect::<Vec<&str>>();

    match args.as_slice() {
        [] | ["-i"] => repl(&config),
        ["-f", file_path] => read_from_file(file_path, &config),
        ["-e", input] => run_once(input, &config),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn repl(config: &Config) -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                // errors are already logged by the pipeline
                if let Ok(evaluation) = calc_rust::run(&line, config) {
                    println!("{}", evaluation.value);
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str, config: &Config) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;
    run_once(&contents, config)
}

fn run_once(input: &str, config: &Config) -> DynResult {
    let evaluation = calc_rust::run(input, config)?;
    println!("{}", evaluation.value);
    Ok(())
}
