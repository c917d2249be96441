// crates/domain/src/apex.rs
//! APEX exposure values as stored in catalog EXIF tables.

/// Aperture value (Av) to f-number: `N = 2^(Av / 2)`.
pub fn aperture_to_f_number(av: f64) -> f64 {
    (av / 2.0).exp2()
}

/// f-number label with one decimal, e.g. `"2.8"`.
pub fn f_number_label(av: f64) -> String {
    format!("{:.1}", aperture_to_f_number(av))
}

/// Time value (Tv) to an exposure time label: `"1/" + 2^Tv`, rounded.
pub fn shutter_speed_to_exposure_time(tv: f64) -> String {
    format!("1/{:.0}", tv.exp2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_common_apertures() {
        assert_eq!(f_number_label(3.0), "2.8");
        assert_eq!(f_number_label(4.0), "4.0");
        assert_eq!(f_number_label(0.0), "1.0");
        assert!((aperture_to_f_number(8.0) - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn converts_shutter_speeds() {
        assert_eq!(shutter_speed_to_exposure_time(7.0), "1/128");
        assert_eq!(shutter_speed_to_exposure_time(6.643_856), "1/100");
        assert_eq!(shutter_speed_to_exposure_time(0.0), "1/1");
    }
}
