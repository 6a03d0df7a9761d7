use clap::{Parser, Subcommand};
use std::io;
use uf_core::{Category, conversions_in, convert};

mod menu;

#[derive(Parser)]
#[command(name = "uf-cli")]
#[command(about = "UnitFlow CLI - Measurement unit conversion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported conversions grouped by category
    List,
    /// Run a single conversion and print the result
    Convert {
        /// Conversion name (e.g. CelsiusToFahrenheit)
        name: String,
        /// Value to convert
        value: f64,
    },
    /// Interactive category menu (the default when no command is given)
    Menu,
}

fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => cmd_list(),
        Some(Commands::Convert { name, value }) => cmd_convert(&name, value),
        Some(Commands::Menu) | None => cmd_menu(),
    }
}

fn cmd_list() -> io::Result<()> {
    for category in Category::ALL {
        println!("{}:", category.label());
        for entry in conversions_in(category) {
            println!("  {} ({})", entry.name, entry.units);
        }
    }
    Ok(())
}

fn cmd_convert(name: &str, value: f64) -> io::Result<()> {
    tracing::debug!(name, value, "running one-shot conversion");
    match convert(name, value) {
        Ok(result) => {
            println!("Converted value: {:.2}", result);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn cmd_menu() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    menu::run(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}
