use clap::{Parser, Subcommand};

/// CLI arguments for pinmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "pinmap",
    version,
    about = "CLI for querying and exercising the pinmap fixture"
)]
pub struct CliArgs {
    /// Path to the input fixture (default: the bundled markers.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// API key for the MapTiler satellite layer
    #[arg(long = "maptiler-key", env = "PINMAP_MAPTILER_KEY", global = true)]
    pub maptiler_key: Option<String>,

    /// API key for the Thunderforest transit layer
    #[arg(
        long = "thunderforest-key",
        env = "PINMAP_THUNDERFOREST_KEY",
        global = true
    )]
    pub thunderforest_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the fixture contents
    Stats,

    /// List all countries with their pin counts
    Countries,

    /// Search pins by city, country, or submitter substring
    Search {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// Run the full selection flow: search, select the first match, fly the
    /// camera, and print the recents list
    Goto {
        /// Substring to search; the first match is selected
        query: String,
    },

    /// Resolve a concrete tile URL from the layer registry
    TileUrl {
        /// Layer name: street, satellite, traffic, or transit
        layer: String,
        z: u8,
        x: u32,
        y: u32,
    },
}
