// crates/infra/src/catalog/sqlite.rs
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::debug;
use luminosity_domain::{
    analytics::{DistributionEntry, DistributionList},
    apex,
    model::{NamedObject, NamedObjectList, PhotoRecord, SidecarFileRecord, parse_capture_time},
};
use luminosity_ports::catalog::{CatalogOpener, CatalogReader};
use luminosity_shared_kernel::{FieldValue, InfrastructureError, Record, Result, COUNT_FIELD};
use rusqlite::{Connection, OpenFlags, Row, types::ValueRef};

use super::queries;

/// A Lightroom catalog opened read-only.
pub struct SqliteCatalog {
    path: PathBuf,
    // `Connection` is not `Sync`.
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Opens `path` without write access and checks it is an SQLite database.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::CatalogOpen`] when the file is missing,
    /// unreadable, or not a database.
    pub fn open(path: &Path) -> Result<Self> {
        let open_failed = |e: rusqlite::Error| InfrastructureError::CatalogOpen {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(open_failed)?;
        conn.query_row(queries::SCHEMA_CHECK, [], |row| row.get::<_, i64>(0)).map_err(open_failed)?;

        debug!("action=catalog_open path={} status=ok", path.display());
        Ok(Self { path: path.to_path_buf(), conn: Mutex::new(conn) })
    }

    /// Runs `sql` and maps every row, logging the outcome under `label`.
    fn query<T, F>(&self, label: &str, sql: &str, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| InfrastructureError::Query {
            label: label.to_string(),
            details: "connection lock poisoned".to_string(),
        })?;

        match collect_rows(&conn, sql, map) {
            Ok(rows) => {
                debug!("action=query label={label} status=ok rows={}", rows.len());
                Ok(rows)
            }
            Err(e) => {
                debug!("action=query label={label} status=error error=\"{e}\"");
                Err(InfrastructureError::Query { label: label.to_string(), details: e.to_string() }.into())
            }
        }
    }

    fn named_objects(&self, label: &str, sql: &str) -> Result<NamedObjectList> {
        self.query(label, sql, |row| Ok(NamedObject::new(row.get(0)?, label_at(row, 1)?)))
            .map(NamedObjectList::new)
    }

    /// `id, label, count` rows.
    fn distribution(&self, label: &str, sql: &str) -> Result<DistributionList> {
        self.query(label, sql, |row| Ok(DistributionEntry::new(row.get(0)?, label_at(row, 1)?, row.get(2)?)))
            .map(DistributionList::new)
    }

    /// `apex value, count` rows, labelled with `format`. Distinct APEX values
    /// that round to the same label are folded together.
    fn apex_distribution(&self, label: &str, sql: &str, format: fn(f64) -> String) -> Result<DistributionList> {
        let rows = self.query(label, sql, |row| Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?)))?;

        let mut entries: Vec<DistributionEntry> = Vec::with_capacity(rows.len());
        for (value, count) in rows {
            let text = format(value);
            match entries.last_mut() {
                Some(last) if last.label == text => last.count += count,
                _ => entries.push(DistributionEntry::new(0, text, count)),
            }
        }
        Ok(DistributionList::new(entries))
    }
}

fn collect_rows<T, F>(conn: &Connection, sql: &str, map: F) -> rusqlite::Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map)?;
    rows.collect()
}

/// Column `idx` as a cell; SQL NULL and blobs have no value.
fn field_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<FieldValue>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null | ValueRef::Blob(_) => None,
        ValueRef::Integer(n) => Some(FieldValue::Integer(n)),
        ValueRef::Real(n) => Some(FieldValue::Number(n)),
        ValueRef::Text(bytes) => Some(FieldValue::Text(String::from_utf8_lossy(bytes).into_owned())),
    })
}

/// Column `idx` rendered as a label; NULL becomes the empty string.
fn label_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(text_at(row, idx)?.unwrap_or_default())
}

fn text_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(field_at(row, idx)?.map(|v| v.as_key().into_owned()))
}

/// Integer columns that older catalogs sometimes store as REAL.
fn int_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    Ok(match field_at(row, idx)? {
        Some(FieldValue::Integer(n)) => Some(n),
        Some(FieldValue::Number(n)) => Some(n as i64),
        Some(FieldValue::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn real_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<f64>> {
    Ok(match field_at(row, idx)? {
        Some(FieldValue::Integer(n)) => Some(n as f64),
        Some(FieldValue::Number(n)) => Some(n),
        Some(FieldValue::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn photo_record(row: &Row<'_>) -> rusqlite::Result<PhotoRecord> {
    let photo = PhotoRecord {
        id: row.get(0)?,
        id_global: label_at(row, 1)?,
        full_name: label_at(row, 2)?,
        lens: text_at(row, 3)?,
        camera: text_at(row, 4)?,
        file_format: label_at(row, 5)?,
        file_height: int_at(row, 6)?,
        file_width: int_at(row, 7)?,
        orientation: text_at(row, 8)?,
        capture_time: text_at(row, 9)?.as_deref().and_then(parse_capture_time),
        rating: int_at(row, 10)?,
        color_labels: label_at(row, 11)?,
        pick: int_at(row, 12)?,
        date_day: int_at(row, 13)?,
        date_month: int_at(row, 14)?,
        date_year: int_at(row, 15)?,
        flash_fired: int_at(row, 16)?.map(|n| n != 0),
        iso: int_at(row, 17)?,
        focal_length: real_at(row, 19)?,
        has_gps: int_at(row, 21)?.is_some_and(|n| n != 0),
        latitude: real_at(row, 22)?,
        longitude: real_at(row, 23)?,
        caption: text_at(row, 24)?,
        copyright: text_at(row, 25)?,
        creator: text_at(row, 26)?,
        ..PhotoRecord::default()
    };
    Ok(photo.with_exposure(real_at(row, 18)?, real_at(row, 20)?))
}

fn sunburst_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    let mut record = Record::new().with(COUNT_FIELD, row.get::<_, i64>(0)?);
    let columns = [
        ("camera", field_at(row, 1)?),
        ("lens", field_at(row, 2)?),
        ("aperture", row.get::<_, Option<f64>>(3)?.map(|av| FieldValue::from(apex::f_number_label(av)))),
        ("focal_length", field_at(row, 4)?),
        ("exposure", row.get::<_, Option<f64>>(5)?.map(|tv| FieldValue::from(apex::shutter_speed_to_exposure_time(tv)))),
    ];
    for (name, value) in columns {
        if let Some(value) = value {
            record = record.with(name, value);
        }
    }
    Ok(record)
}

fn sidecar_record(row: &Row<'_>) -> rusqlite::Result<SidecarFileRecord> {
    Ok(SidecarFileRecord {
        photo_id: row.get(0)?,
        root_path: label_at(row, 1)?,
        folder_path: label_at(row, 2)?,
        base_name: label_at(row, 3)?,
        extension: label_at(row, 4)?,
        sidecar_extension: label_at(row, 5)?,
    })
}

impl CatalogReader for SqliteCatalog {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lenses(&self) -> Result<NamedObjectList> {
        self.named_objects("lenses", queries::LENSES)
    }

    fn cameras(&self) -> Result<NamedObjectList> {
        self.named_objects("cameras", queries::CAMERAS)
    }

    fn photo_counts_by_date(&self) -> Result<DistributionList> {
        self.distribution("photos_by_date", queries::PHOTOS_BY_DATE)
    }

    fn camera_distribution(&self) -> Result<DistributionList> {
        self.distribution("camera_distribution", queries::CAMERA_DISTRIBUTION)
    }

    fn lens_distribution(&self) -> Result<DistributionList> {
        self.distribution("lens_distribution", queries::LENS_DISTRIBUTION)
    }

    fn focal_length_distribution(&self) -> Result<DistributionList> {
        self.distribution("focal_length_distribution", queries::FOCAL_LENGTH_DISTRIBUTION)
    }

    fn aperture_distribution(&self) -> Result<DistributionList> {
        self.apex_distribution("aperture_distribution", queries::APERTURE_DISTRIBUTION, apex::f_number_label)
    }

    fn exposure_time_distribution(&self) -> Result<DistributionList> {
        self.apex_distribution(
            "exposure_time_distribution",
            queries::EXPOSURE_TIME_DISTRIBUTION,
            apex::shutter_speed_to_exposure_time,
        )
    }

    fn edit_count_distribution(&self) -> Result<DistributionList> {
        self.distribution("edit_count_distribution", queries::EDIT_COUNT_DISTRIBUTION)
    }

    fn keyword_distribution(&self) -> Result<DistributionList> {
        self.distribution("keyword_distribution", queries::KEYWORD_DISTRIBUTION)
    }

    fn sunburst_rows(&self) -> Result<Vec<Record>> {
        self.query("sunburst", queries::SUNBURST, sunburst_record)
    }

    fn sidecars(&self) -> Result<Vec<SidecarFileRecord>> {
        self.query("for_each_sidecar", queries::SIDECARS, sidecar_record)
    }

    fn photos(&self) -> Result<Vec<PhotoRecord>> {
        self.query("get_photos", queries::PHOTOS, photo_record)
    }
}

/// Opens catalogs as [`SqliteCatalog`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteCatalogOpener;

impl SqliteCatalogOpener {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogOpener for SqliteCatalogOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn CatalogReader>> {
        Ok(Box::new(SqliteCatalog::open(path)?))
    }
}
