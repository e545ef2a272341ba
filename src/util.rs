// Unit formatters shared across the tracker views.

use wasm_bindgen::JsValue;

/// Render a Unix timestamp (seconds) as the browser's locale clock time,
/// e.g. "3:42:07 PM". Invalid inputs fall through to the platform's
/// "Invalid Date" rendering.
pub fn format_time(timestamp_secs: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_secs * 1000.0));
    String::from(date.to_locale_time_string("default"))
}

/// Meters to miles, two decimals.
pub fn format_distance(meters: f64) -> String {
    let miles = meters * 0.000_621_371;
    format!("{miles:.2} mi")
}

/// Meters/second to miles/hour, one decimal. The feed reports speed as an
/// optional field and some vehicles report a flat zero while stopped; both
/// cases show as "-".
pub fn format_speed(meters_per_second: Option<f64>) -> String {
    match meters_per_second {
        Some(mps) if mps != 0.0 && !mps.is_nan() => format!("{:.1} mph", mps * 2.23694),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_zero() {
        assert_eq!(format_distance(0.0), "0.00 mi");
    }

    #[test]
    fn distance_one_mile() {
        assert_eq!(format_distance(1609.34), "1.00 mi");
    }

    #[test]
    fn distance_rounds_to_two_decimals() {
        assert_eq!(format_distance(804.67), "0.50 mi");
        assert_eq!(format_distance(100.0), "0.06 mi");
    }

    #[test]
    fn speed_absent_variants() {
        assert_eq!(format_speed(None), "-");
        assert_eq!(format_speed(Some(0.0)), "-");
        assert_eq!(format_speed(Some(f64::NAN)), "-");
    }

    #[test]
    fn speed_ten_mph() {
        assert_eq!(format_speed(Some(4.4704)), "10.0 mph");
    }

    #[test]
    fn speed_one_decimal() {
        assert_eq!(format_speed(Some(1.0)), "2.2 mph");
        assert_eq!(format_speed(Some(31.2928)), "70.0 mph");
    }
}
