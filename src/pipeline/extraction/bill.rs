use crate::models::enums::OrderKind;
use crate::models::fields::{BillFields, BillLineItem};

use super::patterns;

/// Billed-name phrases that mark a line item as lab work.
const LAB_ITEM_HINTS: &[&str] = &["test", "scan", "x-ray", "ecg", "mri", "profile", "culture"];

/// Billed-name phrases that mark a line item as a supplement.
const SUPPLEMENT_ITEM_HINTS: &[&str] = &["supplement", "vitamin", "protein", "calcium"];

/// Extract structured bill fields from a document's concatenated text.
/// Never fails: every field degrades to its documented default.
pub fn extract(text: &str) -> BillFields {
    BillFields {
        bill_number: patterns::BILL_NUMBER.captures(text).map(|c| c[1].to_string()),
        date: patterns::extract_date(text),
        time: patterns::extract_time(text),
        visit_reason: patterns::VISIT_REASON
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .filter(|r| !r.is_empty()),
        line_items: extract_line_items(text),
        total_amount: extract_total(text),
        facility_name: super::facility_name(text),
        facility_address: super::facility_address(text),
        tc_eligible: true,
    }
}

/// Scan billed lines. Zero matches emit exactly one placeholder entry so
/// downstream consumers never see an empty item list.
fn extract_line_items(text: &str) -> Vec<BillLineItem> {
    let items: Vec<BillLineItem> = patterns::LINE_ITEM
        .captures_iter(text)
        .map(|caps| {
            let name = caps[1].trim().to_string();
            let price = caps[2].parse::<f64>().ok();
            BillLineItem {
                kind: item_kind(&name),
                name,
                brand: None,
                composition: None,
                price,
                discount: None,
                // No discount captured on the line, so final equals price.
                final_amount: price,
            }
        })
        .collect();

    if items.is_empty() {
        return BillFields::default().line_items;
    }
    items
}

fn extract_total(text: &str) -> f64 {
    patterns::TOTAL_AMOUNT
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
        .map(|t| t.max(0.0))
        .unwrap_or(0.0)
}

fn item_kind(name: &str) -> OrderKind {
    let lower = name.to_lowercase();
    if SUPPLEMENT_ITEM_HINTS.iter().any(|h| lower.contains(h)) {
        OrderKind::Supplement
    } else if LAB_ITEM_HINTS.iter().any(|h| lower.contains(h)) {
        OrderKind::Lab
    } else {
        OrderKind::Medicine
    }
}
