//! CLI frontend for the Baukasten entity builder.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bk",
    about = "Baukasten — assemble entities from properties with a fluent builder",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample entity and print its properties
    Demo,

    /// Build an entity from KIND=VALUE assignments
    Build {
        /// Property assignment, e.g. `a="Prop A"` (repeatable, later ones win)
        #[arg(short, long = "property", value_name = "KIND=VALUE")]
        properties: Vec<String>,

        /// Output format: text, table, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Build { properties, format } => commands::build::run(&properties, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
