//! Display Formatting
//!
//! Currency, date, status badge and chart label helpers. Everything here is
//! pure so the rendering rules stay unit-testable outside the browser.

/// Visual severity for a donation status badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Confirmed donations
    Default,
    /// Pending donations (also the fallback)
    Secondary,
    /// Cancelled donations
    Destructive,
}

/// Label and severity pair for a donation status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

/// Map a donation status to its badge.
///
/// Total over arbitrary input: unknown or missing statuses fall back to the
/// pending pair.
pub fn status_badge(status: &str) -> StatusBadge {
    match status {
        "confirmed" => StatusBadge {
            label: "Confirmé",
            variant: BadgeVariant::Default,
        },
        "cancelled" => StatusBadge {
            label: "Annulé",
            variant: BadgeVariant::Destructive,
        },
        _ => StatusBadge {
            label: "En attente",
            variant: BadgeVariant::Secondary,
        },
    }
}

/// Format an amount as francs CFA with French digit grouping.
///
/// Groups of three digits are separated by U+202F (narrow no-break space),
/// the fr-FR convention. Amounts are rounded to whole francs; the CFA franc
/// has no subunit.
pub fn format_cfa(amount: f64) -> String {
    let francs = amount.round() as i64;
    let digits = francs.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(c);
    }

    if francs < 0 {
        format!("-{} F CFA", grouped)
    } else {
        format!("{} F CFA", grouped)
    }
}

/// Render an ISO timestamp as a French short date (dd/mm/yyyy).
///
/// Unparseable input is echoed back unchanged rather than crashing the view.
pub fn format_date(iso: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(iso) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    iso.to_string()
}

/// First whitespace-delimited token of a Rotarian's name, used as the chart
/// label. Two Rotarians sharing a first name collide on the same label; this
/// reproduces the documented behavior and is not deduplicated. A blank or
/// whitespace-only name yields an empty label.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_known_values() {
        assert_eq!(status_badge("pending").label, "En attente");
        assert_eq!(status_badge("pending").variant, BadgeVariant::Secondary);
        assert_eq!(status_badge("confirmed").label, "Confirmé");
        assert_eq!(status_badge("confirmed").variant, BadgeVariant::Default);
        assert_eq!(status_badge("cancelled").label, "Annulé");
        assert_eq!(status_badge("cancelled").variant, BadgeVariant::Destructive);
    }

    #[test]
    fn test_status_badge_is_total() {
        // Missing and unknown statuses resolve to the pending pair
        for status in ["", "unknown-string", "PENDING", "Confirmé"] {
            let badge = status_badge(status);
            assert_eq!(badge.label, "En attente");
            assert_eq!(badge.variant, BadgeVariant::Secondary);
        }
    }

    #[test]
    fn test_format_cfa_grouping() {
        assert_eq!(format_cfa(0.0), "0 F CFA");
        assert_eq!(format_cfa(500.0), "500 F CFA");
        assert_eq!(format_cfa(1500.0), "1\u{202f}500 F CFA");
        assert_eq!(format_cfa(250000.0), "250\u{202f}000 F CFA");
        assert_eq!(format_cfa(1250000.0), "1\u{202f}250\u{202f}000 F CFA");
    }

    #[test]
    fn test_format_cfa_rounds_to_whole_francs() {
        assert_eq!(format_cfa(999.6), "1\u{202f}000 F CFA");
        assert_eq!(format_cfa(-12500.0), "-12\u{202f}500 F CFA");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-12T10:30:00Z"), "12/05/2024");
        assert_eq!(format_date("2024-05-12T10:30:00"), "12/05/2024");
        assert_eq!(format_date("2024-05-12"), "12/05/2024");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_first_name_takes_first_token() {
        assert_eq!(first_name("Jean Dupont"), "Jean");
        assert_eq!(first_name("Jean"), "Jean");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_first_name_whitespace_only_is_empty() {
        assert_eq!(first_name("   "), "");
        assert_eq!(first_name("\t\n"), "");
    }

    #[test]
    fn test_first_name_collision_is_preserved() {
        // Two Rotarians sharing a first name produce the same chart label
        assert_eq!(first_name("Jean Dupont"), first_name("Jean Martin"));
    }
}
