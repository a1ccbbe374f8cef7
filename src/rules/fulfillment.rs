use crate::models::report::TreatmentFulfillment;

/// Check that every prescribed item was billed.
///
/// Names are lower-cased and compared by bidirectional substring match,
/// intentionally loose to tolerate OCR noise ("ECG" matches "ECG monitor
/// rental", and vice versa). No prescriptions or no bills means there is
/// nothing to contradict, which is trivially fulfilled.
pub fn check_fulfillment(prescribed: &[String], billed: &[String]) -> TreatmentFulfillment {
    if prescribed.is_empty() || billed.is_empty() {
        return TreatmentFulfillment {
            is_fulfilled: true,
            missing_treatments: Vec::new(),
        };
    }

    let billed: Vec<String> = billed.iter().map(|b| b.to_lowercase()).collect();

    let missing_treatments: Vec<String> = prescribed
        .iter()
        .map(|p| p.to_lowercase())
        .filter(|p| !p.is_empty())
        .filter(|p| !billed.iter().any(|b| b.contains(p.as_str()) || p.contains(b.as_str())))
        .collect();

    TreatmentFulfillment {
        is_fulfilled: missing_treatments.is_empty(),
        missing_treatments,
    }
}
