use crate::models::enums::ClaimSubtype;
use crate::models::fields::PrescriptionFields;

/// Specialty terms that mark a claim as a specialist claim.
const SPECIALIST_TERMS: &[&str] = &[
    "specialist",
    "cardiology",
    "neurology",
    "orthopedic",
    "dermatology",
];

/// Derive the claim subtype from its prescriptions.
///
/// `Specialist` when any prescription carries the specialist flag, or any
/// doctor specialty contains a specialist term (case-insensitive);
/// otherwise `Medical`.
pub fn determine_subtype(prescriptions: &[&PrescriptionFields]) -> ClaimSubtype {
    let specialist = prescriptions.iter().any(|p| {
        if p.specialist_prescription {
            return true;
        }
        let specialty = p.doctor_specialty.to_lowercase();
        SPECIALIST_TERMS.iter().any(|t| specialty.contains(t))
    });

    if specialist {
        ClaimSubtype::Specialist
    } else {
        ClaimSubtype::Medical
    }
}
