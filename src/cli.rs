use clap::{Parser, Subcommand};

use crate::api::DEFAULT_SERVER;

/// NutriDash — terminal dashboard for a diet recommendation service.
#[derive(Parser, Debug)]
#[command(name = "nutri_dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the recommendation backend.
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    pub server: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive dashboard.
    Dashboard,

    /// One-shot BMI check against the backend.
    Bmi {
        /// Body weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimeters.
        #[arg(long)]
        height: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard
    }
}
