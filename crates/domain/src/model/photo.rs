// crates/domain/src/model/photo.rs
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::apex;

/// Summary metadata for one photo, gathered from the image, EXIF and IPTC
/// tables of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    pub id_global: String,
    /// Absolute path of the original file.
    pub full_name: String,
    pub lens: Option<String>,
    pub camera: Option<String>,

    pub file_format: String,
    pub file_height: Option<i64>,
    pub file_width: Option<i64>,
    pub orientation: Option<String>,
    pub capture_time: Option<NaiveDateTime>,
    pub rating: Option<i64>,
    pub color_labels: String,
    pub pick: Option<i64>,

    pub date_day: Option<i64>,
    pub date_month: Option<i64>,
    pub date_year: Option<i64>,
    pub flash_fired: Option<bool>,
    pub iso: Option<i64>,
    /// APEX time value.
    pub shutter_speed: Option<f64>,
    pub exposure_time: Option<String>,
    pub focal_length: Option<f64>,
    /// APEX aperture value.
    pub aperture: Option<f64>,
    pub fnumber: Option<String>,
    pub has_gps: bool,
    #[serde(rename = "lat")]
    pub latitude: Option<f64>,
    #[serde(rename = "lon")]
    pub longitude: Option<f64>,

    pub caption: Option<String>,
    pub copyright: Option<String>,
    pub creator: Option<String>,
}

impl PhotoRecord {
    /// Sets both APEX exposure values and their display labels.
    #[must_use]
    pub fn with_exposure(mut self, shutter_speed: Option<f64>, aperture: Option<f64>) -> Self {
        self.shutter_speed = shutter_speed;
        self.exposure_time = shutter_speed.map(apex::shutter_speed_to_exposure_time);
        self.aperture = aperture;
        self.fnumber = aperture.map(apex::f_number_label);
        self
    }
}

/// Parses a catalog capture time. Lightroom stores local time, sometimes
/// with a UTC offset; the offset is dropped.
pub fn parse_capture_time(text: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
