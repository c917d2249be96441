// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use luminosity_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl OutputFormat {
    /// File extension used when no output path is given.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Table => "txt",
        }
    }
}

/// Sunburst rows expose these fields.
pub const SUNBURST_FIELDS: &[&str] = &["camera", "lens", "aperture", "focal_length", "exposure"];

/// Ordered list of grouping fields, outermost first. Example: `camera,lens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBy(pub Vec<String>);

impl GroupBy {
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields not produced by the sunburst query.
    pub fn unknown_fields(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|f| !SUNBURST_FIELDS.contains(f))
            .collect()
    }
}

impl Default for GroupBy {
    fn default() -> Self {
        Self(["camera", "lens", "aperture", "focal_length"].map(String::from).to_vec())
    }
}

impl FromStr for GroupBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self(Vec::new()));
        }
        let fields = s
            .split(',')
            .map(str::trim)
            .map(|f| {
                if f.is_empty() {
                    Err(DomainError::InvalidGroupBy { input: s.to_string() })
                } else {
                    Ok(f.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(fields))
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
