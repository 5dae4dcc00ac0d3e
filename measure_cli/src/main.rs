//! # Plumb CLI Application
//!
//! Terminal tape-measure calculator. Each subcommand parses the dimensions it
//! is given, combines them, and prints the result in architectural and decimal
//! form. With no subcommand it prompts for measurements one per line, the way
//! the calculator forms do.
//!
//! ```text
//! measure_cli add "3' 4-1/2\"" "7-3/4"
//! measure_cli --json sum 10'6 "4' 2-1/4" "11-3/4"
//! measure_cli div "-8' 1\"" 3
//! ```

mod logger;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

use measure_core::{parse, MeasureError, MeasureResult, MeasureSettings, Measurement};

#[derive(Parser)]
#[command(name = "measure_cli")]
#[command(about = "Feet-inches-fraction calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// JSON settings file (denominator, decimal_places)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a measurement and show it in every form
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Add two measurements
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Subtract the second measurement from the first
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Multiply a measurement by a number
    Scale {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(allow_hyphen_values = true)]
        factor: f64,
    },

    /// Divide a measurement by a number
    Div {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(allow_hyphen_values = true)]
        divisor: f64,
    },

    /// Total a list of measurements
    Sum {
        #[arg(required = true, allow_hyphen_values = true)]
        items: Vec<String>,
    },
}

/// One rendered result, as printed or serialized
#[derive(Debug, Serialize)]
struct Report {
    expression: String,
    measurement: Measurement,
    fraction: String,
    decimal_inches: String,
    total_feet: String,
}

impl Report {
    fn new(expression: impl Into<String>, measurement: Measurement, settings: &MeasureSettings) -> Self {
        Report {
            expression: expression.into(),
            measurement,
            fraction: settings.format_fraction(measurement),
            decimal_inches: settings.format_decimal(measurement),
            total_feet: settings.format_feet(measurement),
        }
    }

    fn print(&self, as_json: bool) {
        if as_json {
            if let Ok(json) = serde_json::to_string_pretty(self) {
                println!("{}", json);
            }
            return;
        }
        println!("{}", self.expression);
        println!("  = {}", self.fraction);
        println!("  = {} in", self.decimal_inches);
        println!("  = {} ft", self.total_feet);
    }
}

fn run(command: Commands, settings: &MeasureSettings) -> MeasureResult<Report> {
    let report = match command {
        Commands::Parse { text } => {
            let m = parse(&text)?;
            Report::new(text, m, settings)
        }
        Commands::Add { a, b } => {
            let m = parse(&a)? + parse(&b)?;
            Report::new(format!("{} + {}", a, b), m, settings)
        }
        Commands::Sub { a, b } => {
            let m = parse(&a)? - parse(&b)?;
            Report::new(format!("{} - ({})", a, b), m, settings)
        }
        Commands::Scale { text, factor } => {
            let m = parse(&text)? * factor;
            Report::new(format!("{} x {}", text, factor), m, settings)
        }
        Commands::Div { text, divisor } => {
            let m = (parse(&text)? / divisor)?;
            Report::new(format!("{} / {}", text, divisor), m, settings)
        }
        Commands::Sum { items } => {
            let parts = items
                .iter()
                .map(|item| parse(item))
                .collect::<MeasureResult<Vec<_>>>()?;
            let total: Measurement = parts.iter().sum();
            Report::new(items.join(" + "), total, settings)
        }
    };
    Ok(report)
}

/// Read measurements line by line until EOF or a blank line.
fn interactive(settings: &MeasureSettings, as_json: bool) {
    println!("Plumb - Measurement Calculator");
    println!("==============================");
    println!("Enter a measurement (e.g. 3' 4-1/2\"), blank line to quit.");
    println!();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        match parse(text) {
            Ok(m) => Report::new(text, m, settings).print(as_json),
            // Bad input is not fatal here; show the help and ask again
            Err(e) => eprintln!("{}", e),
        }
        println!();
    }
}

fn report_error(error: &MeasureError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let settings = match cli.settings.as_deref() {
        Some(path) => match MeasureSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => MeasureSettings::default(),
    };

    let Some(command) = cli.command else {
        interactive(&settings, cli.json);
        return ExitCode::SUCCESS;
    };

    match run(command, &settings) {
        Ok(report) => {
            report.print(cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
