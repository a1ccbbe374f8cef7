use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ClaimSubtype, Severity};

/// One business-level finding attached to the report.
///
/// Findings are the engine's primary output, not a failure mode: `Flag` is
/// advisory, `Warning` needs attention, `Error` is blocking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Visit-reason consistency across prescriptions and bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitReasonConsistency {
    pub is_consistent: bool,
    pub prescription_reasons: Vec<String>,
    pub bill_reasons: Vec<String>,
    /// Tokens (> 3 chars) appearing more than once across the combined
    /// reason texts.
    pub shared_keywords: Vec<String>,
}

/// Whether every prescribed item appears somewhere on a bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentFulfillment {
    pub is_fulfilled: bool,
    pub missing_treatments: Vec<String>,
}

/// Why a billed item is excluded under the policy terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    ExcludedItem,
    ExcludedCategory,
}

/// One billed item disallowed under policy terms-and-conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyExclusion {
    pub item_name: String,
    pub amount: f64,
    pub reason: ExclusionReason,
}

/// Per-bill declared-vs-calculated total mismatch detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountMismatch {
    pub bill_id: Uuid,
    pub calculated_total: f64,
    pub declared_total: f64,
    /// Signed `declared - calculated`, rounded to 2 decimals.
    pub difference: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountValidation {
    pub is_valid: bool,
    /// Detail for the first bill exceeding tolerance; None when all pass.
    pub mismatch: Option<AmountMismatch>,
}

/// A prescription missing the doctor's sign/seal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsignedPrescription {
    pub doctor_name: String,
    pub facility_name: String,
}

/// The engine's output: the sole externally visible artifact of the core.
///
/// Recomputed wholesale each time the engine runs, never partially patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimValidationReport {
    pub subtype: ClaimSubtype,
    pub flags: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub errors: Vec<Finding>,
    /// Sum of non-excluded line-item finals, currency-rounded to 2 decimals.
    pub eligible_amount: f64,
    /// Sum of declared bill totals, rounded to 2 decimals.
    pub total_amount: f64,
    pub visit_reason_consistency: VisitReasonConsistency,
    pub treatment_fulfillment: TreatmentFulfillment,
    pub policy_exclusions: Vec<PolicyExclusion>,
    pub amount_validation: AmountValidation,
    pub unsigned_prescriptions: Vec<UnsignedPrescription>,
}
