use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use enumerated::{Beverage, CaseIterable, Direction, Expression, Planet, RawRepresentable};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Enumerated - evaluate expression trees and explore enumerations
#[derive(Parser, Debug)]
#[command(name = "enumerated")]
#[command(about = "Evaluate arithmetic expression trees and list enumeration cases")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Parse an infix expression using '+', '*' and parentheses, then evaluate it
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Fail on integer overflow instead of wrapping
        #[arg(long)]
        checked: bool,
    },
    /// Evaluate the built-in example trees
    Demo,
    /// List every beverage on offer
    Beverages,
    /// Look up a planet by its position from the sun
    Planet {
        #[arg(allow_negative_numbers = true)]
        position: i32,
    },
    /// List the compass directions with their raw values
    Directions,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    let args = CliArgs::parse();

    CliConfig {
        command: args.command,
        log_level: args.log_level,
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn demo_expressions() -> Vec<Expression> {
    let five = Expression::literal(5);
    let four = Expression::literal(4);
    let sum = Expression::addition(five.clone(), four);
    let product = Expression::multiplication(sum.clone(), Expression::literal(2));
    let nested = Expression::addition(
        Expression::literal(1),
        Expression::addition(
            Expression::literal(1),
            Expression::addition(Expression::literal(1), Expression::literal(1)),
        ),
    );
    vec![five, sum, product, nested]
}

/// Produce the lines printed for `command`
pub fn execute(command: &Command) -> Result<Vec<String>> {
    match command {
        Command::Eval {
            expression,
            checked,
        } => {
            let expr = expression
                .parse::<Expression>()
                .with_context(|| format!("Invalid expression '{}'", expression))?;
            let value = if *checked {
                expr.try_evaluate()
                    .with_context(|| format!("Failed to evaluate '{}'", expression))?
            } else {
                expr.evaluate()
            };
            Ok(vec![format!("{} = {}", expr, value)])
        }
        Command::Demo => {
            let expressions = demo_expressions();
            let values = enumerated::evaluate_all(&expressions);
            Ok(expressions
                .iter()
                .zip(values)
                .map(|(expr, value)| format!("{} = {}", expr, value))
                .collect())
        }
        Command::Beverages => {
            let mut lines = vec![format!("{} beverages available", Beverage::case_count())];
            lines.extend(Beverage::all_cases().map(|b| b.to_string()));
            Ok(lines)
        }
        Command::Planet { position } => match Planet::from_raw_value(*position) {
            Some(planet) => Ok(vec![format!("Planet at position {}: {}", position, planet)]),
            None => {
                warn!("No planet at position {}", position);
                Ok(vec![format!("There isn't a planet at position {}", position)])
            }
        },
        Command::Directions => Ok(Direction::all_cases()
            .map(|d| format!("{:?} = \"{}\"", d, d.raw_value()))
            .collect()),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Running command: {:?}", config.command);

    for line in execute(&config.command)? {
        println!("{}", line);
    }
    Ok(())
}
