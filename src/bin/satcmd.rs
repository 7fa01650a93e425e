use clap::{App, Arg};
use colored::Colorize;
use satcmd::config::{OutputFormat, SimulatorConfig, DEFAULT_LOG_FILE};
use satcmd::{logging, CommandDispatcher, Session};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("satcmd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Space Systems Engineering Team")
        .about("🛰️  Satellite Command Simulator - orientation, solar panels and data collection")
        .arg(
            Arg::with_name("log-file")
                .short("l")
                .long("log-file")
                .value_name("PATH")
                .help("Append-only log file")
                .takes_value(true)
                .default_value(DEFAULT_LOG_FILE),
        )
        .arg(
            Arg::with_name("log-level")
                .short("L")
                .long("log-level")
                .value_name("LEVEL")
                .help("Minimum level written to the log file")
                .takes_value(true)
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .takes_value(true)
                .possible_values(&["table", "json", "compact"])
                .default_value("table"),
        )
        .arg(
            Arg::with_name("script")
                .short("s")
                .long("script")
                .value_name("PATH")
                .help("Read commands from a file instead of stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Do not print prompts"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable verbose output"),
        )
        .get_matches();

    let config = SimulatorConfig::from_options(
        matches.value_of("log-file"),
        matches.value_of("log-level"),
        matches.value_of("format"),
        matches.value_of("script"),
    )?
    .with_quiet(matches.is_present("quiet"))
    .with_verbose(matches.is_present("verbose"));

    logging::init(&config.log)?;
    info!("Logging to {} at level {}", config.log.path.display(), config.log.level);

    if config.verbose && config.format == OutputFormat::Table {
        println!("{}", "🛰️  SatCmd - Satellite Command Simulator".bright_blue().bold());
        println!("{} {} ({})", "Logging to".dimmed(), config.log.path.display(), config.log.level);
        if let Some(script) = &config.script {
            println!("{} {}", "Reading commands from".dimmed(), script.display());
        }
        println!();
    }

    let dispatcher = CommandDispatcher::new();
    let stdout = io::stdout();

    let summary = match &config.script {
        Some(path) => {
            let input = BufReader::new(File::open(path)?);
            Session::new(dispatcher, input, stdout.lock(), config.format)
                .with_prompts(!config.quiet)
                .run()?
        }
        None => {
            let stdin = io::stdin();
            Session::new(dispatcher, stdin.lock(), stdout.lock(), config.format)
                .with_prompts(!config.quiet)
                .run()?
        }
    };

    info!(
        "Session finished: {} commands, {} errors, {} transient notices",
        summary.commands, summary.errors, summary.transient_notices
    );

    if config.verbose && config.format == OutputFormat::Table {
        println!(
            "{} {} commands, {} errors, {} transient notices",
            "Session summary:".dimmed(),
            summary.commands,
            summary.errors,
            summary.transient_notices
        );
    }

    Ok(())
}
