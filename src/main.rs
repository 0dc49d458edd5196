//! # rlutil Command Line Entry Point
//!
//! Small front end over the library: roll dice, name bearings, make weighted
//! picks and print time stamps.

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rlutil::{
    compass_name_between, current_time, DiceParam, Position, RlError, RlResult, RngConfig, Rnd,
    TimeType,
};
use serde::Serialize;

/// Command line arguments for rlutil.
#[derive(Parser, Debug)]
#[command(name = "rlutil")]
#[command(about = "Dice, compass and time helpers for roguelike development")]
#[command(version)]
struct Args {
    /// Random seed for reproducible rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll one or more dice expressions such as 3d6 or 1d8+2
    Roll {
        #[arg(default_value = rlutil::config::DEFAULT_DICE)]
        dice: Vec<String>,
    },
    /// Name the compass bearing from (X0, Y0) to (X1, Y1)
    Compass {
        #[arg(allow_negative_numbers = true)]
        x0: i32,
        #[arg(allow_negative_numbers = true)]
        y0: i32,
        #[arg(allow_negative_numbers = true)]
        x1: i32,
        #[arg(allow_negative_numbers = true)]
        y1: i32,
    },
    /// Pick an index with probability proportional to its weight
    Pick {
        #[arg(required = true, allow_negative_numbers = true)]
        weights: Vec<i32>,
    },
    /// Print the current local time
    Time {
        /// Finest field to include
        #[arg(long, value_enum, default_value_t = Granularity::Second)]
        lowest: Granularity,

        /// Use file-name friendly separators
        #[arg(long)]
        compact: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Granularity {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl From<Granularity> for TimeType {
    fn from(g: Granularity) -> Self {
        match g {
            Granularity::Year => TimeType::Year,
            Granularity::Month => TimeType::Month,
            Granularity::Day => TimeType::Day,
            Granularity::Hour => TimeType::Hour,
            Granularity::Minute => TimeType::Minute,
            Granularity::Second => TimeType::Second,
        }
    }
}

#[derive(Serialize)]
struct RollReport {
    dice: String,
    result: i32,
}

fn main() -> RlResult<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level)?;

    info!("Starting rlutil v{}", rlutil::VERSION);

    let config = RngConfig { seed: args.seed };
    let mut rnd = Rnd::from_config(&config);
    debug!("Using seed {}", rnd.seed());

    match &args.command {
        Command::Roll { dice } => run_roll(dice, &mut rnd, args.json),
        Command::Compass { x0, y0, x1, y1 } => {
            let name = compass_name_between(Position::new(*x0, *y0), Position::new(*x1, *y1));
            print_value(&name, args.json)
        }
        Command::Pick { weights } => {
            let idx = rnd.weighted_choice(weights)?;
            print_value(&idx, args.json)
        }
        Command::Time { lowest, compact } => {
            let stamp = current_time().time_str((*lowest).into(), !compact);
            print_value(&stamp, args.json)
        }
    }
}

/// Initializes env_logger at the requested level.
fn initialize_logging(log_level: &str) -> RlResult<()> {
    let level: log::LevelFilter = log_level
        .parse()
        .map_err(|_| RlError::InvalidArgument(format!("unknown log level '{}'", log_level)))?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();

    Ok(())
}

fn run_roll(expressions: &[String], rnd: &mut Rnd, json: bool) -> RlResult<()> {
    let mut reports = Vec::with_capacity(expressions.len());
    for expr in expressions {
        let dice: DiceParam = expr.parse()?;
        let result = dice.roll(rnd);
        debug!("Rolled {} -> {}", dice, result);
        reports.push(RollReport {
            dice: dice.to_string(),
            result,
        });
    }

    if json {
        println!("{}", serde_json::to_string(&reports)?);
    } else {
        for report in &reports {
            println!("{}: {}", report.dice, report.result);
        }
    }

    Ok(())
}

fn print_value<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> RlResult<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}
