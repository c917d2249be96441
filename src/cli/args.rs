// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use luminosity_domain::options::GroupBy;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "luminosity", version = crate::VERSION, about = "Operate on Lightroom catalogs")]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate catalog statistics
    Stats(StatsArgs),
    /// Generate stats for rendering sunburst graphs
    Sunburst(SunburstArgs),
    /// Inspect JPG sidecar files
    #[command(subcommand)]
    Sidecars(SidecarsCommand),
}

#[derive(ClapArgs, Debug)]
pub struct StatsArgs {
    /// Path to output file (`-` for standard output) [default: stats.<format extension>]
    #[arg(short = 'o', long = "outfile", value_hint = ValueHint::FilePath)]
    pub outfile: Option<String>,

    /// Also write a summary .json file for each catalog, next to the merged output
    #[arg(short = 'c', long)]
    pub per_catalog: bool,

    /// Only descend this many directory levels when searching for catalogs
    #[arg(long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Json)]
    pub format: CliOutputFormat,

    /// Format the JSON output indented for human readability
    #[arg(short = 'p', long)]
    pub pretty_print: bool,

    /// Catalog files or directories containing catalogs
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SunburstArgs {
    /// Path to output file (`-` for standard output)
    #[arg(short = 'o', long = "outfile", default_value = "sunburst.json", value_hint = ValueHint::FilePath)]
    pub outfile: String,

    /// Grouping fields, outermost ring first (camera, lens, aperture, focal_length, exposure)
    #[arg(short = 'g', long, default_value = "camera,lens,aperture,focal_length")]
    pub groupby: GroupBy,

    /// Name of the root node
    #[arg(long, default_value = "All")]
    pub label: String,

    /// Reject rows with a missing grouping field or a non-numeric count
    #[arg(long)]
    pub strict: bool,

    /// Format the JSON output indented for human readability
    #[arg(short = 'p', long)]
    pub pretty_print: bool,

    /// Catalog to process
    #[arg(value_hint = ValueHint::FilePath)]
    pub catalog: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum SidecarsCommand {
    /// List sidecar stats
    Summary {
        /// Catalogs to process
        #[arg(required = true)]
        catalogs: Vec<PathBuf>,
    },
    /// List all sidecar file paths
    List {
        /// Catalogs to process
        #[arg(required = true)]
        catalogs: Vec<PathBuf>,
    },
}
