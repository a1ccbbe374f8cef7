use serde::{Deserialize, Serialize};

use super::enums::OrderKind;

/// Default visit reason when a prescription carries none.
pub const DEFAULT_VISIT_REASON: &str = "General consultation";

/// Fallback display strings for facility fields (display fields are never
/// null; absence yields a fixed placeholder).
pub const FACILITY_NOT_SPECIFIED: &str = "Facility not specified";
pub const ADDRESS_NOT_SPECIFIED: &str = "Address not specified";

/// Structured fields of one logical document, keyed by document kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedFields {
    Prescription(PrescriptionFields),
    Bill(BillFields),
}

impl ExtractedFields {
    pub fn as_prescription(&self) -> Option<&PrescriptionFields> {
        match self {
            Self::Prescription(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_bill(&self) -> Option<&BillFields> {
        match self {
            Self::Bill(f) => Some(f),
            _ => None,
        }
    }
}

/// One prescribed order (medicine, supplement, or lab work).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionOrder {
    pub item: String,
    pub kind: OrderKind,
    pub dose: Option<String>,
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionFields {
    pub prescription_number: Option<String>,
    /// Canonical `YYYY-MM-DD`, or None when no date token was found.
    pub date: Option<String>,
    /// Canonical 24-hour `HH:MM`, or None.
    pub time: Option<String>,
    pub visit_reason: String,
    pub sign_and_seal_present: bool,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub diagnoses: Vec<String>,
    pub orders: Vec<PrescriptionOrder>,
    pub facility_name: String,
    pub facility_address: String,
    pub specialist_prescription: bool,
}

impl Default for PrescriptionFields {
    fn default() -> Self {
        Self {
            prescription_number: None,
            date: None,
            time: None,
            visit_reason: DEFAULT_VISIT_REASON.into(),
            sign_and_seal_present: false,
            doctor_name: "Unknown".into(),
            doctor_specialty: "General Medicine".into(),
            diagnoses: Vec::new(),
            orders: vec![PrescriptionOrder {
                item: "Unspecified item".into(),
                kind: OrderKind::Medicine,
                dose: None,
                frequency: None,
            }],
            facility_name: FACILITY_NOT_SPECIFIED.into(),
            facility_address: ADDRESS_NOT_SPECIFIED.into(),
            specialist_prescription: false,
        }
    }
}

/// One billed line item. `final_amount` equals `price - discount` when both
/// are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillLineItem {
    pub name: String,
    pub kind: OrderKind,
    pub brand: Option<String>,
    pub composition: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub final_amount: Option<f64>,
}

impl BillLineItem {
    /// The amount this line contributes to totals: `final`, falling back to
    /// `price`, then 0.
    pub fn effective_amount(&self) -> f64 {
        self.final_amount.or(self.price).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillFields {
    pub bill_number: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub visit_reason: Option<String>,
    pub line_items: Vec<BillLineItem>,
    /// Declared total paid amount, never negative.
    pub total_amount: f64,
    pub facility_name: String,
    pub facility_address: String,
    /// Defaulted true pending rule evaluation.
    pub tc_eligible: bool,
}

impl Default for BillFields {
    fn default() -> Self {
        Self {
            bill_number: None,
            date: None,
            time: None,
            visit_reason: None,
            line_items: vec![BillLineItem {
                name: "Unspecified item".into(),
                kind: OrderKind::Medicine,
                brand: None,
                composition: None,
                price: None,
                discount: None,
                final_amount: None,
            }],
            total_amount: 0.0,
            facility_name: FACILITY_NOT_SPECIFIED.into(),
            facility_address: ADDRESS_NOT_SPECIFIED.into(),
            tc_eligible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prescription_has_placeholder_order() {
        let fields = PrescriptionFields::default();
        assert_eq!(fields.orders.len(), 1);
        assert_eq!(fields.visit_reason, DEFAULT_VISIT_REASON);
        assert!(!fields.sign_and_seal_present);
    }

    #[test]
    fn default_bill_is_tc_eligible() {
        let fields = BillFields::default();
        assert!(fields.tc_eligible);
        assert_eq!(fields.total_amount, 0.0);
        assert_eq!(fields.line_items.len(), 1);
    }

    #[test]
    fn effective_amount_prefers_final() {
        let item = BillLineItem {
            name: "Consultation".into(),
            kind: OrderKind::Medicine,
            brand: None,
            composition: None,
            price: Some(500.0),
            discount: Some(100.0),
            final_amount: Some(400.0),
        };
        assert_eq!(item.effective_amount(), 400.0);
    }

    #[test]
    fn effective_amount_falls_back_to_price_then_zero() {
        let mut item = BillLineItem {
            name: "ECG".into(),
            kind: OrderKind::Lab,
            brand: None,
            composition: None,
            price: Some(300.0),
            discount: None,
            final_amount: None,
        };
        assert_eq!(item.effective_amount(), 300.0);
        item.price = None;
        assert_eq!(item.effective_amount(), 0.0);
    }

    #[test]
    fn extracted_fields_serializes_with_kind_tag() {
        let fields = ExtractedFields::Bill(BillFields::default());
        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.contains("\"kind\":\"bill\""));
    }
}
