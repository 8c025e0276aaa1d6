use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "plex-cleaner")]
#[command(about = "Deletes low-scoring duplicate media from a Plex library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score duplicate media parts and delete everything below the minimum score
    Clean,
    /// Print configuration values
    PrintConfig,
}
