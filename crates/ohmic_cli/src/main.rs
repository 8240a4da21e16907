use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug};
use ohmic_notation::Quantity;

use crate::render::{OutputFormat, render_prefixes, render_value};

mod render;

#[derive(Parser, Debug)]
#[command(name = "ohmic", about = "Electronics value notation: 4K7, 10k, 100μF, 2.4GHz", version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a value written in RKM or SI shorthand notation
    Parse {
        /// Value to parse, e.g. "4K7", "10k", "100nF"
        value: String,

        /// Physical quantity the value is read as
        #[arg(short, long, value_enum, default_value_t = QuantityArg::Resistance)]
        quantity: QuantityArg,

        #[arg(long, value_enum, default_value_t = OutputFormat::Abbr)]
        format: OutputFormat,
    },

    /// Render a plain number with the most compact SI prefix
    Abbreviate {
        /// Plain decimal number, e.g. 4700 or 0.0000047
        #[arg(allow_negative_numbers = true)]
        number: f64,

        /// Unit symbol appended to the result
        #[arg(short, long, default_value = "")]
        unit: String,
    },

    /// List the supported SI prefixes
    Prefixes {
        #[arg(long, value_enum, default_value_t = OutputFormat::Abbr)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum QuantityArg {
    Voltage,
    Current,
    Power,
    Resistance,
    Capacitance,
    Frequency,
}

impl From<QuantityArg> for Quantity {
    fn from(arg: QuantityArg) -> Self {
        match arg {
            QuantityArg::Voltage => Quantity::Voltage,
            QuantityArg::Current => Quantity::Current,
            QuantityArg::Power => Quantity::Power,
            QuantityArg::Resistance => Quantity::Resistance,
            QuantityArg::Capacitance => Quantity::Capacitance,
            QuantityArg::Frequency => Quantity::Frequency,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Parse {
            value,
            quantity,
            format,
        } => {
            let quantity = Quantity::from(quantity);
            let parsed = quantity
                .parse(&value)
                .with_context(|| format!("invalid {quantity} value '{value}'"))?;
            debug!("{value} -> {parsed}");
            render_value(quantity, &value, parsed, format)
        }
        Command::Abbreviate { number, unit } => {
            Ok(format!("{}{}", ohmic_notation::abbreviate(number), unit))
        }
        Command::Prefixes { format } => render_prefixes(format),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
