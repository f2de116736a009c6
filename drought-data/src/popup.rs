//! Popup markup for a single station.

use crate::station::Station;

/// Fractional digits that hold the exact decimal expansion of any `f64`.
const EXACT_DIGITS: usize = 1074;

/// Build the popup HTML fragment for a station.
///
/// The header carries the status phrase and the coordinate to 2 decimal
/// places. The body lists the raw Z-score inside a badge, both precipitation
/// values, their signed difference to 1 decimal place and the years of data.
pub fn popup_html(station: &Station) -> String {
    let severity = station.severity();
    let badge = station.badge();

    format!(
        r#"<div class="popup-header">
  <h3>{status}</h3>
  <div class="coordinates">{lat}°, {lon}°</div>
</div>
<div class="popup-body">
  {z_row}
  {current_row}
  {historical_row}
  {difference_row}
  {years_row}
</div>"#,
        status = severity.status(),
        lat = to_fixed(station.lat, 2),
        lon = to_fixed(station.lon, 2),
        z_row = stat_row(
            "Z-Score:",
            &format!(
                r#"<span class="z-score-badge {}">{}</span>"#,
                badge.class(),
                to_fixed(station.z_score_raw, 2)
            ),
        ),
        current_row = stat_row(
            "Current (30-day):",
            &format!("{} cm", to_fixed(station.current_prcp, 1))
        ),
        historical_row = stat_row(
            "Historical Average:",
            &format!("{} cm", to_fixed(station.historical_mean, 1))
        ),
        difference_row = stat_row(
            "Difference:",
            &format!("{} cm", to_fixed(station.difference(), 1))
        ),
        years_row = stat_row(
            "Years of Data:",
            &format!("{} years", station.years_of_data)
        ),
    )
}

/// Format with `digits` fractional digits, rounding exact decimal ties away
/// from zero like JavaScript's `Number.prototype.toFixed`.
///
/// `{:.N}` rounds exact ties to even (`10.25` becomes `10.2`). Only values
/// whose exact decimal expansion ends in a 5 at position `digits + 1` are
/// affected; those are nudged to the next float away from zero first.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && is_exact_tie(value, digits) {
        let away = f64::from_bits(value.to_bits() + 1);
        return format!("{:.*}", digits, away);
    }
    format!("{:.*}", digits, value)
}

fn is_exact_tie(value: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let fraction = exact.split_once('.').map(|(_, f)| f).unwrap_or("");
    let significant = fraction.trim_end_matches('0');
    significant.len() == digits + 1 && significant.ends_with('5')
}

fn stat_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="popup-stat"><span class="label">{}</span><span class="value">{}</span></div>"#,
        label, value
    )
}
