// crates/infra/src/persistence/report.rs
use std::{
    fmt,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::debug;
use luminosity_ports::report::{CatalogReport, ReportSink};
use luminosity_shared_kernel::Result;
use serde::Serialize;

use super::FileWriter;

/// Serialized form of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json { pretty: bool },
    Yaml,
}

impl Encoding {
    /// # Errors
    ///
    /// Returns a serialization error when `value` cannot be encoded.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>> {
        let mut bytes = match self {
            Self::Json { pretty: true } => serde_json::to_vec_pretty(value)?,
            Self::Json { pretty: false } => serde_json::to_vec(value)?,
            Self::Yaml => return Ok(serde_yaml::to_string(value)?.into_bytes()),
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Where a report goes: a file, or standard output for `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn parse(arg: &str) -> Self {
        if arg == "-" { Self::Stdout } else { Self::File(PathBuf::from(arg)) }
    }

    /// # Errors
    ///
    /// Fails when standard output is closed or the file cannot be written.
    pub fn write(&self, data: &[u8]) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)?;
                out.flush()?;
            }
            Self::File(path) => {
                debug!("action=write file={} bytes={}", path.display(), data.len());
                FileWriter::atomic_write(path, data)?;
            }
        }
        Ok(())
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Writes each catalog's report to `<dir>/<catalog stem>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self { dir: dir.into(), pretty }
    }

    pub fn target_for(&self, catalog: &Path) -> PathBuf {
        let stem = catalog.file_stem().map_or_else(|| "catalog".into(), |s| s.to_string_lossy());
        self.dir.join(format!("{stem}.json"))
    }
}

impl ReportSink for JsonFileSink {
    fn emit(&self, report: &CatalogReport) -> Result<()> {
        let bytes = Encoding::Json { pretty: self.pretty }.encode(report)?;
        OutputTarget::File(self.target_for(&report.path)).write(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: i64,
    }

    #[test]
    fn encodes_json_and_yaml() {
        let sample = Sample { name: "X-T2", count: 3 };

        let compact = Encoding::Json { pretty: false }.encode(&sample).unwrap();
        assert_eq!(compact, b"{\"name\":\"X-T2\",\"count\":3}\n");

        let pretty = String::from_utf8(Encoding::Json { pretty: true }.encode(&sample).unwrap()).unwrap();
        assert!(pretty.contains("\n  \"count\": 3"));

        let yaml = String::from_utf8(Encoding::Yaml.encode(&sample).unwrap()).unwrap();
        assert_eq!(yaml, "name: X-T2\ncount: 3\n");
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(OutputTarget::parse("-"), OutputTarget::Stdout);
        assert_eq!(OutputTarget::parse("out.json"), OutputTarget::File(PathBuf::from("out.json")));
    }

    #[test]
    fn sink_names_files_after_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path(), false);
        let report = CatalogReport { path: PathBuf::from("/library/Main 2017.lrcat"), ..CatalogReport::default() };

        sink.emit(&report).unwrap();

        let written = fs::read_to_string(dir.path().join("Main 2017.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["path"], "/library/Main 2017.lrcat");
        assert!(value["stats"]["by_date"].as_array().unwrap().is_empty());
    }
}
