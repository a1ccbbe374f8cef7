pub mod bill;
pub mod patterns;
pub mod prescription;

use crate::models::enums::DocumentType;
use crate::models::fields::{
    ExtractedFields, ADDRESS_NOT_SPECIFIED, FACILITY_NOT_SPECIFIED,
};

/// Extract the kind-specific field schema from a logical document's
/// concatenated text.
///
/// Prescription and bill documents have structured schemas; reports and
/// unknown pages carry no extractable schema and yield None. Extraction
/// itself never fails; pattern misses degrade to per-field defaults.
pub fn extract_fields(doc_type: DocumentType, text: &str) -> Option<ExtractedFields> {
    match doc_type {
        DocumentType::Prescription => {
            Some(ExtractedFields::Prescription(prescription::extract(text)))
        }
        DocumentType::Bill => Some(ExtractedFields::Bill(bill::extract(text))),
        DocumentType::Report | DocumentType::Unknown => None,
    }
}

/// Facility name display field; placeholder when no anchor matches.
pub(crate) fn facility_name(text: &str) -> String {
    patterns::FACILITY_NAME
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FACILITY_NOT_SPECIFIED.into())
}

/// Facility address display field; placeholder when no anchor matches.
pub(crate) fn facility_address(text: &str) -> String {
    patterns::FACILITY_ADDRESS
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| ADDRESS_NOT_SPECIFIED.into())
}
