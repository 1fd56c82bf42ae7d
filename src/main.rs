use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use unit_converter::config::Config;
use unit_converter::converter;
use unit_converter::form::ConversionForm;
use unit_converter::units::{self, ConversionError, ImperialUnit, LengthUnit, MetricUnit};

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(about = "Convert metric lengths to imperial lengths", long_about = None)]
struct Cli {
    /// Config file (TOML) with default units and failure text
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single measurement
    Convert {
        /// Measurement (e.g., "12.5" or "-12.5 km")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Metric unit to convert from
        #[arg(short, long)]
        from: Option<MetricUnit>,

        /// Imperial unit to convert to
        #[arg(short, long)]
        to: Option<ImperialUnit>,

        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a measurement into every imperial unit
    Table {
        /// Measurement (e.g., "12.5" or "-12.5 km")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Metric unit to convert from
        #[arg(short, long)]
        from: Option<MetricUnit>,

        /// Print the conversions as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported units
    Units,

    /// Read measurements from stdin and print each result
    Interactive {
        /// Metric unit to start with
        #[arg(short, long)]
        from: Option<MetricUnit>,

        /// Imperial unit to start with
        #[arg(short, long)]
        to: Option<ImperialUnit>,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        },
    ))
    .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            json,
        } => convert_measurement(&config, &value, from, to, json),
        Commands::Table { value, from, json } => convert_table(&config, &value, from, json),
        Commands::Units => list_units(),
        Commands::Interactive { from, to } => run_interactive(&config, from, to),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => {
            log::debug!("No config file given, using defaults");
            Ok(Config::empty())
        }
    }
}

/// Pick the source unit: explicit flag, then a unit suffix on the value, then the config default
fn resolve_source(value: &str, from: Option<MetricUnit>, config: &Config) -> (String, MetricUnit) {
    if let Some(from) = from {
        return (value.to_string(), from);
    }

    if units::looks_like_measurement(value) {
        match units::parse_measurement(value) {
            Some((number, unit)) => {
                log::info!("Using unit '{}' from measurement '{}'", unit, value);
                return (number, unit);
            }
            None => log::warn!("'{}' does not end in a metric unit", value),
        }
    }

    (value.to_string(), config.defaults.from)
}

/// Returns Ok(false) when the measurement is invalid
fn convert_measurement(
    config: &Config,
    value: &str,
    from: Option<MetricUnit>,
    to: Option<ImperialUnit>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (number, from) = resolve_source(value, from, config);
    let to = to.unwrap_or(config.defaults.to);
    log::debug!("Converting '{}' from {} to {}", number, from, to);

    match converter::try_convert(&number, from, to) {
        Ok(conversion) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&conversion)?);
            } else {
                println!("{}", conversion.formatted);
            }
            Ok(true)
        }
        Err(e) => {
            log::info!("{}", e);
            eprintln!("{}", config.failure_text);
            Ok(false)
        }
    }
}

fn convert_table(
    config: &Config,
    value: &str,
    from: Option<MetricUnit>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (number, from) = resolve_source(value, from, config);

    match converter::convert_to_all(&number, from) {
        Ok(conversions) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&conversions)?);
            } else {
                println!("{} {}:", number, from);
                for conversion in &conversions {
                    println!("  = {}", conversion.formatted);
                }
            }
            Ok(true)
        }
        Err(e) => {
            log::info!("{}", e);
            eprintln!("{}", config.failure_text);
            Ok(false)
        }
    }
}

fn list_units() -> Result<bool, Box<dyn std::error::Error>> {
    println!("Convert from ({}):", MetricUnit::ALL[0].system());
    for unit in MetricUnit::ALL {
        println!("  - {} ({})", unit.name(), unit.abbreviation());
    }

    println!("\nConvert to ({}):", ImperialUnit::ALL[0].system());
    for unit in ImperialUnit::ALL {
        println!("  - {} ({})", unit.name(), unit.abbreviation());
    }

    Ok(true)
}

fn run_interactive(
    config: &Config,
    from: Option<MetricUnit>,
    to: Option<ImperialUnit>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut form = ConversionForm::from_config(config);
    if let Some(from) = from {
        form.set_from(from);
    }
    if let Some(to) = to {
        form.set_to(to);
    }

    println!("{} (to {}). Commands: :from <unit>, :to <unit>, :quit", form.placeholder(), form.to);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;

        match apply_line(&mut form, &line) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => break,
            Err(e) => eprintln!("{}", e),
        }
        stdout.flush()?;
    }

    Ok(true)
}

/// Apply one line of interactive input to the form
/// Returns the text to print, or None on `:quit`
fn apply_line(form: &mut ConversionForm, line: &str) -> Result<Option<String>, ConversionError> {
    // Piped input from Windows keeps the carriage return
    let line = line.trim_end_matches('\r');

    if let Some(unit) = line.strip_prefix(":from ") {
        form.set_from(unit.parse::<MetricUnit>()?);
        return Ok(Some(format!("{}\n{}", form.placeholder(), form.result_text())));
    }

    if let Some(unit) = line.strip_prefix(":to ") {
        form.set_to(unit.parse::<ImperialUnit>()?);
    } else if line.trim() == ":quit" {
        return Ok(None);
    } else {
        form.set_measurement(line);
    }

    Ok(Some(form.result_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_negative_values_parse_as_measurements() {
        match parse(&["unit-converter", "convert", "-2.5 km", "--to", "ft"]).command {
            Commands::Convert { value, from, to, .. } => {
                assert_eq!(value, "-2.5 km");
                assert_eq!(from, None);
                assert_eq!(to, Some(ImperialUnit::Feet));
            }
            _ => panic!("Expected convert command"),
        }

        match parse(&["unit-converter", "convert", "-1"]).command {
            Commands::Convert { value, .. } => assert_eq!(value, "-1"),
            _ => panic!("Expected convert command"),
        }

        match parse(&["unit-converter", "table", "-1", "--from", "km"]).command {
            Commands::Table { value, from, .. } => {
                assert_eq!(value, "-1");
                assert_eq!(from, Some(MetricUnit::Kilometers));
            }
            _ => panic!("Expected table command"),
        }
    }

    #[test]
    fn test_resolve_source_uses_unit_suffix() {
        let config = Config::empty();

        assert_eq!(
            resolve_source("-2.5 km", None, &config),
            ("-2.5".to_string(), MetricUnit::Kilometers)
        );
        assert_eq!(
            resolve_source("-1", None, &config),
            ("-1".to_string(), MetricUnit::Meters)
        );
        // An explicit unit wins over the suffix
        assert_eq!(
            resolve_source("3", Some(MetricUnit::Centimeters), &config),
            ("3".to_string(), MetricUnit::Centimeters)
        );
        // Imperial suffix is left for the converter to reject
        assert_eq!(
            resolve_source("7 feet", None, &config),
            ("7 feet".to_string(), MetricUnit::Meters)
        );
    }

    #[test]
    fn test_apply_line_strips_carriage_return() {
        let mut form = ConversionForm::new();

        assert_eq!(
            apply_line(&mut form, "1\r").unwrap(),
            Some("3.281 feet".to_string())
        );
        assert_eq!(
            apply_line(&mut form, ":to mi\r").unwrap(),
            Some("0.001 miles".to_string())
        );
        assert_eq!(apply_line(&mut form, ":quit\r").unwrap(), None);
    }

    #[test]
    fn test_apply_line_unit_commands() {
        let mut form = ConversionForm::new();
        form.set_measurement("1");

        assert_eq!(
            apply_line(&mut form, ":from km").unwrap(),
            Some("Measurement in kilometers\n3280.833 feet".to_string())
        );
        assert!(apply_line(&mut form, ":to yards").is_err());
        assert_eq!(form.to, ImperialUnit::Feet);

        assert_eq!(
            apply_line(&mut form, "abc").unwrap(),
            Some("Error with initial measurement".to_string())
        );
    }
}
