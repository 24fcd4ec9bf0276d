//! script-helper - CLI binary.
//!
//! Reports color-coded messages and resolves long/short flag pairs the way
//! shell scripts built on the library do. Fatal conditions are reported by
//! the library and turned into a non-zero exit here.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use script_helper::{get_flag, init_tracing, ColorWhen, Fatal, Reporter};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorWhen {
    fn from(v: ColorArg) -> Self {
        match v {
            ColorArg::Auto => ColorWhen::Auto,
            ColorArg::Always => ColorWhen::Always,
            ColorArg::Never => ColorWhen::Never,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Level {
    Error,
    Success,
    Warning,
}

/// script-helper - color-coded script diagnostics and flag pair checks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // ---
    /// Coloring
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one ERROR, SUCCESS or WARNING line to stderr
    Report {
        /// Severity of the message
        #[arg(long, value_enum, default_value = "error")]
        level: Level,

        /// Exit with a non-zero status after an ERROR line
        #[arg(long)]
        fatal: bool,

        /// Message text
        message: String,
    },

    /// Resolve the `--name`/`-n` and `--times`/`-t` pairs
    ///
    /// Each pair must be given in exactly one of its two forms.
    Resolve {
        /// Name (long form)
        #[arg(long = "name", value_name = "NAME", default_value = "")]
        name_long: String,

        /// Name (short form)
        #[arg(short = 'n', value_name = "NAME", default_value = "")]
        name_short: String,

        /// Repeat count (long form)
        #[arg(long = "times", value_name = "COUNT", default_value_t = 0)]
        times_long: u32,

        /// Repeat count (short form)
        #[arg(short = 't', value_name = "COUNT", default_value_t = 0)]
        times_short: u32,
    },
}

/// Capture version number from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // ---
    let args = Args::parse();
    let color: ColorWhen = args.color.into();

    init_tracing(color)?;
    debug!("script-helper v{VERSION}, color {color}");

    let reporter = Reporter::stderr(color);
    if let Err(fatal) = run(args.command, &reporter) {
        fatal.exit();
    }

    Ok(())
}

fn run(command: Command, reporter: &Reporter<std::io::Stderr>) -> Result<(), Fatal> {
    // ---
    match command {
        Command::Report {
            level,
            fatal,
            message,
        } => match level {
            Level::Error => reporter.report_error(&message, fatal)?,
            Level::Success => reporter.success(&message),
            Level::Warning => reporter.warning(&message),
        },
        Command::Resolve {
            name_long,
            name_short,
            times_long,
            times_short,
        } => {
            let name = get_flag(
                reporter,
                name_long,
                name_short,
                &String::new(),
                Some("--name/-n"),
            )?;
            let times = get_flag(reporter, times_long, times_short, &0, Some("--times/-t"))?;

            println!("name={name}");
            println!("times={times}");
            reporter.success("resolved --name/-n and --times/-t");
        }
    }

    Ok(())
}
