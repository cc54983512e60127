use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use workflow::config::FinderConfig;
use workflow::runner::Runner;

mod workflow;

const USAGE: &str = "Usage: find-customers <filepath>";

#[derive(Parser, Debug)]
#[command(
    name = "find-customers",
    about = "List customers living within a radius of the office",
    disable_help_flag = true
)]
struct Args {
    /// Customer data file, one JSON object per line
    filepath: Option<PathBuf>,
    /// Positionals after the filepath are accepted and ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    ignored: Vec<OsString>,
    /// Override the search radius (metres)
    #[arg(long)]
    radius: Option<f64>,
    /// Load office location and radius from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    help: bool,
}

/// What the process should do once arguments are understood.
#[derive(Debug)]
enum Command {
    Usage,
    Find { filepath: PathBuf, config: FinderConfig },
}

fn dispatch<I, T>(argv: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(_) => return Ok(Command::Usage),
    };

    let filepath = match args.filepath {
        Some(path) if !args.help => path,
        _ => return Ok(Command::Usage),
    };

    let mut config = match args.config {
        Some(path) => FinderConfig::load(path)?,
        None => FinderConfig::default(),
    };
    if let Some(radius) = args.radius {
        anyhow::ensure!(radius >= 0.0, "radius must be non-negative, got {}", radius);
        config.radius_m = radius;
    }

    Ok(Command::Find { filepath, config })
}

fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {}", err)
}

fn fatal(message: &str) -> ExitCode {
    eprintln!("{}", message);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();

    let command = match dispatch(std::env::args_os()) {
        Ok(command) => command,
        Err(err) => return fatal(&error_message(&err)),
    };

    match command {
        Command::Usage => fatal(USAGE),
        Command::Find { filepath, config } => match Runner::new(config).execute(&filepath) {
            Ok(csv) => {
                println!("{}", csv);
                ExitCode::SUCCESS
            }
            Err(err) => fatal(&error_message(&err)),
        },
    }
}
