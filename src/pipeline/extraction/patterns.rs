//! Shared pattern tables and field-level capture rules.
//!
//! Extraction is intentionally pattern-based, not a grammar: a capitalized
//! phrase next to a number may be misread as a line item. That precision
//! trade-off is accepted; downstream rule tolerances are calibrated
//! against it.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// `D[/-]M[/-]Y` with 1-2 digit day/month and exactly 2 or 4 digit year.
pub static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4}|\d{2})\b").unwrap());

/// `H:MM` with optional am/pm suffix.
pub static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2}):(\d{2})\s*(am|pm)?\b").unwrap());

/// Facility name: phrase ending in a facility keyword.
pub static FACILITY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([a-z][a-z .&'-]*(?:hospital|clinic|medical center|healthcare))").unwrap()
});

/// Facility address: rest of line after an address anchor.
pub static FACILITY_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:address|location)\s*[:\-]\s*([^\n]+)").unwrap());

/// Prescription identifier: keyword + optional no/number/# + delimiter.
pub static PRESCRIPTION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prescription\s*(?:no|number|#)?\s*[:.\-]\s*([a-z0-9/\-]+)").unwrap()
});

/// Bill identifier: bill/invoice/receipt keyword + optional no/number/#.
pub static BILL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:bill|invoice|receipt)\s*(?:no|number|#)?\s*[:.\-]\s*([a-z0-9/\-]+)")
        .unwrap()
});

/// Diagnosis anchor; every match contributes one entry.
pub static DIAGNOSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)diagnosis\s*[:\-]\s*([^\n]+)").unwrap());

/// Visit reason anchor.
pub static VISIT_REASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:visit reason|reason for visit|chief complaint|consultation for)\s*[:\-]\s*([^\n]+)")
        .unwrap()
});

/// Doctor name following a "Dr." honorific (1-2 capitalized words).
pub static DOCTOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdr\.?[ \t]+([a-z][a-z.]+(?:[ \t]+[a-z][a-z.]+)?)").unwrap()
});

/// Permissive line-item scan: a leading name phrase followed by a quantity
/// or price token on the same line. Intra-line separators are space/tab
/// only, so a match can never reach across a line break.
pub static LINE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:\d+[.)][ \t]*)?([a-z][a-z /&.'-]{2,60}?)[ \t]+(?:rs\.?|inr|\$|₹)?[ \t]*(\d+(?:\.\d{1,2})?)[ \t]*(mg|ml|mcg|g|iu)?[^\n]*$",
    )
    .unwrap()
});

/// Declared total: `total` + optional currency symbol + decimal.
pub static TOTAL_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)total\s*[:\-]?\s*(?:rs\.?|inr|\$|₹)?\s*(\d+(?:\.\d{1,2})?)").unwrap()
});

/// Dosing frequency phrases scanned on an order line.
pub static FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(once daily|twice daily|thrice daily|every \d+ hours|at night|as needed|weekly)\b")
        .unwrap()
});

/// Canonical specialty vocabulary. Matching is case-insensitive; the
/// canonical capitalization is what gets emitted.
pub static SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Orthopedic",
    "Dermatology",
    "Pediatrics",
    "Gynecology",
    "Ophthalmology",
    "Psychiatry",
    "Oncology",
    "Urology",
];

/// Indicators that a doctor sign/seal is present on the page.
pub static SIGN_SEAL_INDICATORS: &[&str] = &["signature", "signed", "seal", "stamp"];

/// First date in document order, normalized to `YYYY-MM-DD`.
///
/// Two-digit years are prefixed with `20`; day and month are zero-padded.
/// A first match that is not a real calendar date yields None.
pub fn extract_date(text: &str) -> Option<String> {
    let caps = DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year_raw = &caps[3];
    let year: i32 = if year_raw.len() == 2 {
        format!("20{year_raw}").parse().ok()?
    } else {
        year_raw.parse().ok()?
    };

    // Reject impossible calendar dates (e.g. 31/02) instead of emitting them.
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// First time token, converted to 24-hour `HH:MM`.
pub fn extract_time(text: &str) -> Option<String> {
    let caps = TIME.captures(text)?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    match caps.get(3).map(|m| m.as_str().to_lowercase()) {
        Some(ref meridiem) if meridiem == "pm" && hour != 12 => hour += 12,
        Some(ref meridiem) if meridiem == "am" && hour == 12 => hour = 0,
        _ => {}
    }
    if hour > 23 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

/// First canonical specialty term found in the text, if any.
pub fn extract_specialty(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    SPECIALTIES
        .iter()
        .find(|s| lower.contains(&s.to_lowercase()))
        .copied()
}

/// Whether any sign/seal indicator appears in the text.
pub fn sign_seal_present(text: &str) -> bool {
    let lower = text.to_lowercase();
    SIGN_SEAL_INDICATORS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Date normalization ──────────────────────────────────────────

    #[test]
    fn date_four_digit_year() {
        assert_eq!(
            extract_date("Visited on 05/06/2024 at the clinic"),
            Some("2024-06-05".into())
        );
    }

    #[test]
    fn date_two_digit_year_prefixed() {
        assert_eq!(extract_date("Date: 5-6-24"), Some("2024-06-05".into()));
    }

    #[test]
    fn date_first_match_wins() {
        assert_eq!(
            extract_date("issued 01/02/2024, valid until 01/03/2024"),
            Some("2024-02-01".into())
        );
    }

    #[test]
    fn date_idempotent_on_canonical_input() {
        // A canonical ISO date re-expressed as D/M/Y round-trips exactly.
        let text = "Consultation date 5/6/2024";
        let first = extract_date(text).unwrap();
        assert_eq!(first, "2024-06-05");
        let re_expressed = "5/6/2024";
        assert_eq!(extract_date(re_expressed), Some(first));
    }

    #[test]
    fn impossible_date_rejected() {
        assert_eq!(extract_date("31/02/2024"), None);
    }

    #[test]
    fn three_digit_year_rejected() {
        assert_eq!(extract_date("printed 1/2/202"), None);
    }

    #[test]
    fn no_date_is_none() {
        assert_eq!(extract_date("no dates here"), None);
    }

    // ── Time normalization ──────────────────────────────────────────

    #[test]
    fn time_24_hour_passthrough() {
        assert_eq!(extract_time("Arrived 14:30"), Some("14:30".into()));
    }

    #[test]
    fn time_pm_adds_twelve() {
        assert_eq!(extract_time("Visit at 2:45 pm"), Some("14:45".into()));
    }

    #[test]
    fn time_noon_pm_unchanged() {
        assert_eq!(extract_time("12:15 PM"), Some("12:15".into()));
    }

    #[test]
    fn time_midnight_am_resets() {
        assert_eq!(extract_time("12:05 am"), Some("00:05".into()));
    }

    #[test]
    fn no_time_is_none() {
        assert_eq!(extract_time("no clock here"), None);
    }

    // ── Vocabulary helpers ──────────────────────────────────────────

    #[test]
    fn specialty_is_canonicalized() {
        assert_eq!(extract_specialty("dept of CARDIOLOGY"), Some("Cardiology"));
        assert_eq!(extract_specialty("general practice"), None);
    }

    #[test]
    fn sign_seal_detected() {
        assert!(sign_seal_present("Doctor's Signature: ___"));
        assert!(sign_seal_present("hospital STAMP affixed"));
        assert!(!sign_seal_present("nothing of note"));
    }

    // ── Line-item scan ──────────────────────────────────────────────

    #[test]
    fn line_item_captures_name_and_amount() {
        let caps: Vec<_> = LINE_ITEM.captures_iter("Cardiology consultation 500\nECG 300\n")
            .collect();
        assert_eq!(caps.len(), 2);
        assert_eq!(caps[0][1].trim(), "Cardiology consultation");
        assert_eq!(&caps[0][2], "500");
        assert_eq!(caps[1][1].trim(), "ECG");
        assert_eq!(&caps[1][2], "300");
    }

    #[test]
    fn match_never_spans_a_line_break() {
        // Each billed line is its own item, even without a trailing newline.
        let caps: Vec<_> = LINE_ITEM
            .captures_iter("Cardiology consultation 500\nECG 300")
            .collect();
        assert_eq!(caps.len(), 2);
        assert!(caps.iter().all(|c| !c[0].contains('\n')));
    }

    #[test]
    fn total_line_not_a_line_item() {
        // The colon and currency symbol keep the declared total out of the
        // line-item scan.
        assert!(LINE_ITEM.captures("Total: $800").is_none());
    }

    #[test]
    fn total_amount_with_currency() {
        let caps = TOTAL_AMOUNT.captures("Total: $812.50").unwrap();
        assert_eq!(&caps[1], "812.50");
    }
}
