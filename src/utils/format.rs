use chrono::{DateTime, NaiveDateTime, Utc};

#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Parses the timestamp shapes the store hands back for `created_at`.
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Postgres text form: "2024-05-01 10:20:30.123+00"
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Local time of day as `HH:MM:SS`; unparsable input is returned verbatim.
#[cfg(feature = "web")]
pub fn format_time_of_day(raw: &str) -> String {
    use js_sys::Date;
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    // The browser knows the viewer's timezone, chrono on wasm does not
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(ts.timestamp_millis() as f64));
    if d.get_time().is_nan() {
        return raw.to_string();
    }
    format!(
        "{}:{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32)
    )
}

#[cfg(not(feature = "web"))]
pub fn format_time_of_day(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}

/// Readout text for a fractional score: `0.92` -> `92%`, absent -> `--`.
pub fn format_score_percent(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{}%", (s * 100.0).round() as i64),
        _ => "--".to_string(),
    }
}

/// Tooltip text for a chart value, keeping the raw precision but dropping
/// float noise like `81.00000000000001`.
pub fn format_percent_value(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{}%", rounded)
    }
}
