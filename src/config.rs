// src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use log::LevelFilter;
use luminosity_domain::{GroupingMode, options::{GroupBy, OutputFormat}};
use luminosity_infra::OutputTarget;
use luminosity_ports::locator::CatalogSearch;
use luminosity_shared_kernel::PresentationError;

use crate::cli::{Args, Command, SidecarsCommand, StatsArgs, SunburstArgs};

/// How much the binary logs unless `RUST_LOG` says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub const fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StatsConfig {
    pub paths: Vec<PathBuf>,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub per_catalog: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub pretty: bool,
    #[builder(default = "OutputTarget::File(PathBuf::from(\"stats.json\"))")]
    pub output: OutputTarget,
}

impl StatsConfig {
    pub fn search(&self) -> CatalogSearch {
        CatalogSearch::new(self.paths.clone()).with_max_depth(self.max_depth)
    }

    /// Per-catalog reports land next to the merged report.
    pub fn per_catalog_dir(&self) -> PathBuf {
        match &self.output {
            OutputTarget::File(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
            OutputTarget::Stdout => PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SunburstConfig {
    pub catalog: PathBuf,
    #[builder(default)]
    pub groupby: GroupBy,
    #[builder(default = "\"All\".to_string()")]
    pub label: String,
    #[builder(default)]
    pub mode: GroupingMode,
    #[builder(default)]
    pub pretty: bool,
    #[builder(default = "OutputTarget::File(PathBuf::from(\"sunburst.json\"))")]
    pub output: OutputTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidecarAction {
    Summary,
    List,
}

#[derive(Debug, Clone)]
pub struct SidecarsConfig {
    pub action: SidecarAction,
    pub catalogs: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum CommandConfig {
    Stats(StatsConfig),
    Sunburst(SunburstConfig),
    Sidecars(SidecarsConfig),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub verbosity: Verbosity,
    pub command: CommandConfig,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let verbosity = match (args.verbose, args.quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        };

        let command = match args.command {
            Command::Stats(stats) => CommandConfig::Stats(stats_config(stats)?),
            Command::Sunburst(sunburst) => CommandConfig::Sunburst(sunburst_config(sunburst)?),
            Command::Sidecars(SidecarsCommand::Summary { catalogs }) => {
                CommandConfig::Sidecars(SidecarsConfig { action: SidecarAction::Summary, catalogs })
            }
            Command::Sidecars(SidecarsCommand::List { catalogs }) => {
                CommandConfig::Sidecars(SidecarsConfig { action: SidecarAction::List, catalogs })
            }
        };

        Ok(Self { verbosity, command })
    }
}

fn stats_config(args: StatsArgs) -> Result<StatsConfig, PresentationError> {
    let format = OutputFormat::from(args.format);
    let outfile = args.outfile.unwrap_or_else(|| format!("stats.{}", format.extension()));
    check_outfile(&outfile)?;
    StatsConfigBuilder::default()
        .paths(args.paths)
        .max_depth(args.max_depth)
        .per_catalog(args.per_catalog)
        .format(format)
        .pretty(args.pretty_print)
        .output(OutputTarget::parse(&outfile))
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}

fn sunburst_config(args: SunburstArgs) -> Result<SunburstConfig, PresentationError> {
    check_outfile(&args.outfile)?;
    let mode = if args.strict { GroupingMode::Strict } else { GroupingMode::Permissive };
    SunburstConfigBuilder::default()
        .catalog(args.catalog)
        .groupby(args.groupby)
        .label(args.label)
        .mode(mode)
        .pretty(args.pretty_print)
        .output(OutputTarget::parse(&args.outfile))
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}

fn check_outfile(outfile: &str) -> Result<(), PresentationError> {
    if outfile.trim().is_empty() || (outfile != "-" && Path::new(outfile).file_name().is_none()) {
        return Err(PresentationError::InvalidValue {
            flag: "--outfile".into(),
            value: outfile.into(),
            reason: "expected a file path or '-'".into(),
        });
    }
    Ok(())
}
