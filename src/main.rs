use clap::{Parser, Subcommand};
use physic::config::Config;
use physic::physic::{Env, Pressure, RelativeHumidity, Temperature};
use physic::reading::{self, NormalizedReading, QuantityKind, Reading};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "physic")]
#[command(about = "Parse, format and check physical quantities", long_about = None)]
struct Cli {
    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a quantity and print its canonical form and base-unit count
    Parse {
        /// Quantity kind (e.g. "distance", "temperature")
        kind: QuantityKind,

        /// Text to parse (e.g. "1Mile", "21.5C")
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Format a raw base-unit count
    Format {
        /// Quantity kind
        kind: QuantityKind,

        /// Count of the kind's base unit (e.g. nanometres for distance)
        #[arg(allow_hyphen_values = true)]
        raw: i64,
    },

    /// List every quantity kind that accepts the input
    Detect {
        /// Text to detect (e.g. "100nF")
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Normalize a readings file and export it as JSON
    Check {
        /// Readings TOML file
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print an ambient reading built from typed flags
    Env {
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<Temperature>,

        #[arg(long, allow_hyphen_values = true)]
        pressure: Option<Pressure>,

        #[arg(long, allow_hyphen_values = true)]
        humidity: Option<RelativeHumidity>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { kind, input, json } => parse_quantity(kind, &input, json),
        Commands::Format { kind, raw } => format_raw(kind, raw),
        Commands::Detect { input } => detect_quantity(&input),
        Commands::Check { path, output } => check_readings(&path, output.as_deref()),
        Commands::Env {
            temperature,
            pressure,
            humidity,
            json,
        } => print_env(temperature, pressure, humidity, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_quantity(kind: QuantityKind, input: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reading = Reading::parse(kind, input).map_err(|e| format!("{} '{}': {}", kind, input, e))?;

    if json {
        let normalized = NormalizedReading::new(kind.as_str(), reading, input);
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    } else {
        println!("{}", reading);
        println!("raw: {}", reading.raw());
    }

    Ok(())
}

fn format_raw(kind: QuantityKind, raw: i64) -> Result<(), Box<dyn std::error::Error>> {
    let reading = Reading::from_raw(kind, raw).map_err(|e| format!("{} {}: {}", kind, raw, e))?;
    println!("{}", reading);
    Ok(())
}

fn detect_quantity(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !reading::looks_like_quantity(input) {
        log::warn!("'{}' does not look like a physical quantity", input);
    }

    let candidates = Reading::detect(input);
    if candidates.is_empty() {
        return Err(format!("no quantity accepts '{}'", input).into());
    }

    for candidate in &candidates {
        println!("{}: {} (raw {})", candidate.kind(), candidate, candidate.raw());
    }

    Ok(())
}

fn check_readings(path: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_from_file(path)?;
    let set = reading::process_readings(&config);

    if set.report.has_issues() {
        eprintln!("{}", set.report);
    }

    let json = serde_json::to_string_pretty(&set)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Readings exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    if !set.report.is_valid() {
        return Err(format!("{} invalid reading(s) in {}", set.report.error_count(), path).into());
    }

    Ok(())
}

fn print_env(
    temperature: Option<Temperature>,
    pressure: Option<Pressure>,
    humidity: Option<RelativeHumidity>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let env = Env {
        temperature: temperature.unwrap_or(Temperature::ZERO_CELSIUS),
        pressure: pressure.unwrap_or_default(),
        humidity: humidity.unwrap_or_default(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        println!("{}", env);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_flags_accept_negative_values() {
        let cli = Cli::try_parse_from([
            "physic",
            "env",
            "--temperature",
            "-40C",
            "--pressure",
            "-1kPa",
            "--humidity",
            "-5%",
        ])
        .unwrap();
        let Commands::Env {
            temperature,
            pressure,
            humidity,
            json,
        } = cli.command
        else {
            panic!("expected the env command");
        };
        assert_eq!(temperature, "-40F".parse().ok());
        assert_eq!(pressure, Some(-Pressure::KILO_PASCAL));
        assert_eq!(humidity, Some(-RelativeHumidity::PERCENT_RH * 5));
        assert!(!json);
    }

    #[test]
    fn test_parse_accepts_negative_input() {
        let cli = Cli::try_parse_from(["physic", "parse", "distance", "-1.5m"]).unwrap();
        let Commands::Parse { kind, input, .. } = cli.command else {
            panic!("expected the parse command");
        };
        assert_eq!(kind, QuantityKind::Distance);
        assert_eq!(input, "-1.5m");
    }
}
