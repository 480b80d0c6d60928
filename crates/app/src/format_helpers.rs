//! Date formatting for the portal tables. Inputs are the ISO `YYYY-MM-DD`
//! strings carried by the sample data.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "2024-01-25" becomes "25 Jan 2024". Anything that does not look like an
/// ISO date is returned unchanged.
pub fn format_date_human(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_string();
    };

    let month = month
        .parse::<usize>()
        .ok()
        .filter(|m| (1..=12).contains(m));
    let day = day.get(..2).and_then(|d| d.parse::<u32>().ok());

    match (month, day) {
        (Some(m), Some(d)) if year.len() == 4 => format!("{d} {} {year}", MONTH_NAMES[m - 1]),
        _ => date.to_string(),
    }
}

/// Review date column: "Pending" until a reviewer picks the item up.
pub fn format_optional_date(date: Option<&str>) -> String {
    date.map(format_date_human)
        .unwrap_or_else(|| "Pending".to_string())
}
