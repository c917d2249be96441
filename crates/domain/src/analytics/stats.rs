// crates/domain/src/analytics/stats.rs
use serde::{Deserialize, Serialize};

use super::DistributionList;

/// Every distribution collected from a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub by_date: DistributionList,
    pub by_camera: DistributionList,
    pub by_lens: DistributionList,
    pub by_focal_length: DistributionList,
    pub by_aperture: DistributionList,
    pub by_exposure_time: DistributionList,
    pub by_edit_count: DistributionList,
    pub by_keyword: DistributionList,
}

impl Stats {
    /// Folds `other` into `self`, distribution by distribution.
    pub fn merge(&mut self, other: &Self) {
        self.by_date = self.by_date.merge([&other.by_date]);
        self.by_camera = self.by_camera.merge([&other.by_camera]);
        self.by_lens = self.by_lens.merge([&other.by_lens]);
        self.by_focal_length = self.by_focal_length.merge([&other.by_focal_length]);
        self.by_aperture = self.by_aperture.merge([&other.by_aperture]);
        self.by_exposure_time = self.by_exposure_time.merge([&other.by_exposure_time]);
        self.by_edit_count = self.by_edit_count.merge([&other.by_edit_count]);
        self.by_keyword = self.by_keyword.merge([&other.by_keyword]);
    }

    /// Named view over every distribution, in report order.
    pub fn sections(&self) -> [(&'static str, &DistributionList); 8] {
        [
            ("By Date", &self.by_date),
            ("By Camera", &self.by_camera),
            ("By Lens", &self.by_lens),
            ("By Focal Length", &self.by_focal_length),
            ("By Aperture", &self.by_aperture),
            ("By Exposure Time", &self.by_exposure_time),
            ("By Edit Count", &self.by_edit_count),
            ("By Keyword", &self.by_keyword),
        ]
    }

    /// Total photos, taken from the per-day distribution.
    pub fn photo_total(&self) -> i64 {
        self.by_date.total()
    }
}
