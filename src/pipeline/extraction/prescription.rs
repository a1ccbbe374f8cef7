use crate::models::enums::OrderKind;
use crate::models::fields::{PrescriptionFields, PrescriptionOrder, DEFAULT_VISIT_REASON};

use super::patterns;

/// Item-name phrases that mark a prescribed order as lab work.
const LAB_ITEM_HINTS: &[&str] = &["test", "scan", "x-ray", "ecg", "mri", "profile", "culture"];

/// Item-name phrases that mark a prescribed order as a supplement.
const SUPPLEMENT_ITEM_HINTS: &[&str] = &["supplement", "vitamin", "protein", "calcium"];

/// Extract structured prescription fields from a document's concatenated
/// text. Never fails: every field degrades to its documented default.
pub fn extract(text: &str) -> PrescriptionFields {
    let specialty = patterns::extract_specialty(text);
    let lower = text.to_lowercase();

    PrescriptionFields {
        prescription_number: patterns::PRESCRIPTION_NUMBER
            .captures(text)
            .map(|c| c[1].to_string()),
        date: patterns::extract_date(text),
        time: patterns::extract_time(text),
        visit_reason: patterns::VISIT_REASON
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_VISIT_REASON.into()),
        sign_and_seal_present: patterns::sign_seal_present(text),
        doctor_name: patterns::DOCTOR_NAME
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| "Unknown".into()),
        doctor_specialty: specialty.unwrap_or("General Medicine").to_string(),
        diagnoses: extract_diagnoses(text),
        orders: extract_orders(text),
        facility_name: super::facility_name(text),
        facility_address: super::facility_address(text),
        specialist_prescription: specialty.is_some() || lower.contains("specialist"),
    }
}

fn extract_diagnoses(text: &str) -> Vec<String> {
    patterns::DIAGNOSIS
        .captures_iter(text)
        .map(|c| c[1].trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

/// Scan order lines. Zero matches emit exactly one placeholder entry so
/// downstream consumers never see an empty order list.
fn extract_orders(text: &str) -> Vec<PrescriptionOrder> {
    let orders: Vec<PrescriptionOrder> = patterns::LINE_ITEM
        .captures_iter(text)
        .map(|caps| {
            let item = caps[1].trim().to_string();
            let dose = match caps.get(3) {
                Some(unit) => Some(format!("{}{}", &caps[2], unit.as_str())),
                None => Some(caps[2].to_string()),
            };
            let line = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            PrescriptionOrder {
                kind: order_kind(&item),
                item,
                dose,
                frequency: patterns::FREQUENCY
                    .captures(line)
                    .map(|c| c[1].to_lowercase()),
            }
        })
        .collect();

    if orders.is_empty() {
        return PrescriptionFields::default().orders;
    }
    orders
}

fn order_kind(item: &str) -> OrderKind {
    let lower = item.to_lowercase();
    if SUPPLEMENT_ITEM_HINTS.iter().any(|h| lower.contains(h)) {
        OrderKind::Supplement
    } else if LAB_ITEM_HINTS.iter().any(|h| lower.contains(h)) {
        OrderKind::Lab
    } else {
        OrderKind::Medicine
    }
}
