use uuid::Uuid;

use crate::models::fields::{BillFields, BillLineItem};
use crate::models::report::{AmountMismatch, AmountValidation, PolicyExclusion};

/// Absolute tolerance between a bill's calculated and declared totals
/// (currency-rounding slack).
const AMOUNT_TOLERANCE: f64 = 0.01;

/// Round to 2 decimals for currency display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validate each bill's line items against its declared total.
///
/// The first bill exceeding tolerance short-circuits with a mismatch detail;
/// passing all bills is valid.
pub fn validate_amounts(bills: &[(Uuid, &BillFields)]) -> AmountValidation {
    for (bill_id, bill) in bills {
        let calculated: f64 = bill.line_items.iter().map(BillLineItem::effective_amount).sum();
        if (calculated - bill.total_amount).abs() > AMOUNT_TOLERANCE {
            return AmountValidation {
                is_valid: false,
                mismatch: Some(AmountMismatch {
                    bill_id: *bill_id,
                    calculated_total: round2(calculated),
                    declared_total: round2(bill.total_amount),
                    difference: round2(bill.total_amount - calculated),
                }),
            };
        }
    }

    AmountValidation {
        is_valid: true,
        mismatch: None,
    }
}

/// Sum of declared bill totals, rounded to 2 decimals. Always recomputed
/// from current claim state, never incrementally maintained.
pub fn total_amount(bills: &[(Uuid, &BillFields)]) -> f64 {
    round2(bills.iter().map(|(_, b)| b.total_amount).sum())
}

/// Sum of non-excluded line-item amounts, rounded to 2 decimals. Items are
/// matched against the exclusion list by name.
pub fn eligible_amount(bills: &[(Uuid, &BillFields)], exclusions: &[PolicyExclusion]) -> f64 {
    let sum: f64 = bills
        .iter()
        .flat_map(|(_, b)| b.line_items.iter())
        .filter(|item| !exclusions.iter().any(|e| e.item_name == item.name))
        .map(BillLineItem::effective_amount)
        .sum();
    round2(sum)
}
