// src/commands.rs
use anyhow::{Context, Result, bail};
use log::{info, warn};
use luminosity_domain::options::OutputFormat;
use luminosity_infra::{Encoding, FsCatalogLocator, FsFileMetadata, JsonFileSink, OutputTarget, SqliteCatalogOpener};
use luminosity_usecase::{BuildSunburst, CollectStats, SummarizeSidecars};

use crate::{
    config::{CommandConfig, Config, SidecarAction, SidecarsConfig, StatsConfig, SunburstConfig},
    presentation,
};

/// Runs the configured subcommand against the real file system.
///
/// # Errors
///
/// Returns the first unrecoverable failure of the subcommand.
pub fn run(config: &Config) -> Result<()> {
    match &config.command {
        CommandConfig::Stats(stats) => run_stats(stats),
        CommandConfig::Sunburst(sunburst) => run_sunburst(sunburst),
        CommandConfig::Sidecars(sidecars) => run_sidecars(sidecars),
    }
}

fn run_stats(config: &StatsConfig) -> Result<()> {
    let locator = FsCatalogLocator::new();
    let opener = SqliteCatalogOpener::new();
    let sink = config.per_catalog.then(|| JsonFileSink::new(config.per_catalog_dir(), config.pretty));

    let mut usecase = CollectStats::new(&locator, &opener);
    if let Some(sink) = &sink {
        usecase = usecase.with_sink(sink);
    }
    let report = usecase.run(&config.search())?;

    let bytes = match config.format {
        OutputFormat::Json => Encoding::Json { pretty: config.pretty }.encode(&report)?,
        OutputFormat::Yaml => Encoding::Yaml.encode(&report)?,
        OutputFormat::Table => presentation::stats_table(&report).into_bytes(),
    };
    config.output.write(&bytes).with_context(|| format!("writing stats to {}", config.output))?;
    info!("action=write file={} catalogs_processed={}", config.output, report.catalogs_processed);
    Ok(())
}

fn run_sunburst(config: &SunburstConfig) -> Result<()> {
    let opener = SqliteCatalogOpener::new();
    let tree = BuildSunburst::new(&opener).run(&config.catalog, &config.label, &config.groupby, config.mode)?;

    let bytes = Encoding::Json { pretty: config.pretty }.encode(&tree)?;
    config.output.write(&bytes).with_context(|| format!("writing sunburst to {}", config.output))?;
    info!("action=write file={} catalog={} size={}", config.output, config.catalog.display(), tree.size());
    Ok(())
}

fn run_sidecars(config: &SidecarsConfig) -> Result<()> {
    let opener = SqliteCatalogOpener::new();
    let metadata = FsFileMetadata;
    let usecase = SummarizeSidecars::new(&opener, &metadata);

    let mut failed = 0_usize;
    for catalog in &config.catalogs {
        let text = match config.action {
            SidecarAction::Summary => usecase.run(catalog).map(|stats| presentation::sidecar_summary(catalog, &stats)),
            SidecarAction::List => usecase.list(catalog).map(|paths| {
                paths.iter().map(|p| format!("{}\n", p.display())).collect::<String>()
            }),
        };
        match text {
            Ok(text) => OutputTarget::Stdout.write(text.as_bytes())?,
            Err(e) => {
                failed += 1;
                warn!("action=sidecars catalog={} error=\"{e}\" Error reading catalog, skipping", catalog.display());
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} catalogs could not be read", config.catalogs.len());
    }
    Ok(())
}
