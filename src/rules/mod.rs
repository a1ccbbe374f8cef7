//! Deterministic business-rule engine.
//!
//! A single evaluation pass over a claim: subtype determination, then
//! subtype-specific checks, then the common checks, then amount aggregation.
//! The engine never fails outright: a missing or malformed sub-field
//! degrades to a safe default and the remaining checks still run, so one bad
//! field never blocks the full report.

pub mod amounts;
pub mod consistency;
pub mod exclusions;
pub mod fulfillment;
pub mod signature;
pub mod subtype;

use uuid::Uuid;

use crate::config::ExclusionPolicy;
use crate::models::claim::Claim;
use crate::models::enums::{ClaimSubtype, DocumentType, Severity};
use crate::models::fields::{BillFields, PrescriptionFields};
use crate::models::report::{
    AmountValidation, ClaimValidationReport, Finding, TreatmentFulfillment,
    VisitReasonConsistency,
};

/// The rule engine. Holds the exclusion policy loaded once at construction.
pub struct RuleEngine {
    policy: ExclusionPolicy,
}

impl RuleEngine {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self::new(ExclusionPolicy::default())
    }

    /// Evaluate a claim into a fresh validation report.
    ///
    /// The report is recomputed wholesale from current claim state on every
    /// call, never patched incrementally.
    pub fn evaluate(&self, claim: &Claim) -> ClaimValidationReport {
        let prescriptions = claim_prescriptions(claim);
        let bills = claim_bills(claim);

        let subtype = subtype::determine_subtype(&prescriptions);

        let mut flags = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        // Advisory: unknown-typed pages signal low-confidence input.
        let unclassified = claim
            .pages
            .iter()
            .filter(|p| matches!(p.doc_type, None | Some(DocumentType::Unknown)))
            .count();
        if unclassified > 0 {
            flags.push(Finding::new(
                Severity::Flag,
                "unclassified_pages",
                format!("{unclassified} page(s) could not be classified"),
            ));
        }

        // Subtype-specific checks.
        let (visit_reason_consistency, treatment_fulfillment) = if subtype
            == ClaimSubtype::Specialist
        {
            let consistency = consistency::check_visit_reasons(
                &prescription_reasons(&prescriptions),
                &bill_reasons(&bills),
            );
            if !consistency.is_consistent {
                warnings.push(Finding::new(
                    Severity::Warning,
                    "visit_reason_mismatch",
                    format!(
                        "Prescription reasons {:?} do not share keywords with bill reasons {:?}",
                        consistency.prescription_reasons, consistency.bill_reasons
                    ),
                ));
            }

            let fulfillment =
                fulfillment::check_fulfillment(&prescribed_items(&prescriptions), &billed_items(&bills));
            if !fulfillment.is_fulfilled {
                warnings.push(Finding::new(
                    Severity::Warning,
                    "unfulfilled_treatments",
                    format!(
                        "Prescribed but not billed: {}",
                        fulfillment.missing_treatments.join(", ")
                    ),
                ));
            }

            (consistency, fulfillment)
        } else {
            (trivially_consistent(&prescriptions, &bills), trivially_fulfilled())
        };

        // Common checks, always run.
        let line_items: Vec<_> = bills.iter().flat_map(|(_, b)| b.line_items.iter()).collect();
        let policy_exclusions = exclusions::check_exclusions(&line_items, &self.policy);
        if !policy_exclusions.is_empty() {
            let excluded_total: f64 = policy_exclusions.iter().map(|e| e.amount).sum();
            errors.push(Finding::new(
                Severity::Error,
                "policy_exclusions",
                format!(
                    "{} billed item(s) excluded under policy terms (total {})",
                    policy_exclusions.len(),
                    amounts::round2(excluded_total)
                ),
            ));
        }

        let amount_validation = amounts::validate_amounts(&bills);
        if let AmountValidation {
            is_valid: false,
            mismatch: Some(ref mismatch),
        } = amount_validation
        {
            errors.push(Finding::new(
                Severity::Error,
                "amount_mismatch",
                format!(
                    "Bill {} declares {} but line items sum to {} (difference {})",
                    mismatch.bill_id,
                    mismatch.declared_total,
                    mismatch.calculated_total,
                    mismatch.difference
                ),
            ));
        }

        let unsigned_prescriptions = signature::check_signatures(&prescriptions);
        if !unsigned_prescriptions.is_empty() {
            warnings.push(Finding::new(
                Severity::Warning,
                "missing_sign_seal",
                format!(
                    "{} prescription(s) lack a doctor sign/seal",
                    unsigned_prescriptions.len()
                ),
            ));
        }

        let eligible_amount = amounts::eligible_amount(&bills, &policy_exclusions);
        let total_amount = amounts::total_amount(&bills);

        tracing::debug!(
            claim_id = %claim.id,
            subtype = subtype.as_str(),
            flags = flags.len(),
            warnings = warnings.len(),
            errors = errors.len(),
            eligible_amount,
            total_amount,
            "Claim evaluated"
        );

        ClaimValidationReport {
            subtype,
            flags,
            warnings,
            errors,
            eligible_amount,
            total_amount,
            visit_reason_consistency,
            treatment_fulfillment,
            policy_exclusions,
            amount_validation,
            unsigned_prescriptions,
        }
    }
}

fn claim_prescriptions(claim: &Claim) -> Vec<&PrescriptionFields> {
    claim
        .documents
        .iter()
        .filter_map(|d| d.fields.as_ref())
        .filter_map(|f| f.as_prescription())
        .collect()
}

fn claim_bills(claim: &Claim) -> Vec<(Uuid, &BillFields)> {
    claim
        .documents
        .iter()
        .filter_map(|d| d.fields.as_ref().map(|f| (d.id, f)))
        .filter_map(|(id, f)| f.as_bill().map(|b| (id, b)))
        .collect()
}

fn prescription_reasons(prescriptions: &[&PrescriptionFields]) -> Vec<String> {
    prescriptions.iter().map(|p| p.visit_reason.clone()).collect()
}

fn bill_reasons(bills: &[(Uuid, &BillFields)]) -> Vec<String> {
    bills
        .iter()
        .filter_map(|(_, b)| b.visit_reason.clone())
        .collect()
}

fn prescribed_items(prescriptions: &[&PrescriptionFields]) -> Vec<String> {
    prescriptions
        .iter()
        .flat_map(|p| p.orders.iter().map(|o| o.item.clone()))
        .collect()
}

fn billed_items(bills: &[(Uuid, &BillFields)]) -> Vec<String> {
    bills
        .iter()
        .flat_map(|(_, b)| b.line_items.iter().map(|i| i.name.clone()))
        .collect()
}

/// Sub-results reported when the specialist checks do not run.
fn trivially_consistent(
    prescriptions: &[&PrescriptionFields],
    bills: &[(Uuid, &BillFields)],
) -> VisitReasonConsistency {
    VisitReasonConsistency {
        is_consistent: true,
        prescription_reasons: prescription_reasons(prescriptions)
            .iter()
            .map(|r| r.to_lowercase())
            .collect(),
        bill_reasons: bill_reasons(bills).iter().map(|r| r.to_lowercase()).collect(),
        shared_keywords: Vec::new(),
    }
}

fn trivially_fulfilled() -> TreatmentFulfillment {
    TreatmentFulfillment {
        is_fulfilled: true,
        missing_treatments: Vec::new(),
    }
}
