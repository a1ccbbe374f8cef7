use crate::models::fields::PrescriptionFields;
use crate::models::report::UnsignedPrescription;

/// List prescriptions lacking a doctor sign/seal, with doctor and facility
/// for the reviewer ("Unknown" when missing).
pub fn check_signatures(prescriptions: &[&PrescriptionFields]) -> Vec<UnsignedPrescription> {
    prescriptions
        .iter()
        .filter(|p| !p.sign_and_seal_present)
        .map(|p| UnsignedPrescription {
            doctor_name: display_or_unknown(&p.doctor_name),
            facility_name: display_or_unknown(&p.facility_name),
        })
        .collect()
}

fn display_or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Unknown".into()
    } else {
        trimmed.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_prescriptions_not_listed() {
        let p = PrescriptionFields {
            sign_and_seal_present: true,
            ..Default::default()
        };
        assert!(check_signatures(&[&p]).is_empty());
    }

    #[test]
    fn unsigned_prescription_listed_with_doctor_and_facility() {
        let p = PrescriptionFields {
            doctor_name: "Smith".into(),
            facility_name: "City Care Hospital".into(),
            sign_and_seal_present: false,
            ..Default::default()
        };
        let unsigned = check_signatures(&[&p]);
        assert_eq!(unsigned.len(), 1);
        assert_eq!(unsigned[0].doctor_name, "Smith");
        assert_eq!(unsigned[0].facility_name, "City Care Hospital");
    }

    #[test]
    fn blank_fields_default_to_unknown() {
        let p = PrescriptionFields {
            doctor_name: "  ".into(),
            facility_name: String::new(),
            sign_and_seal_present: false,
            ..Default::default()
        };
        let unsigned = check_signatures(&[&p]);
        assert_eq!(unsigned[0].doctor_name, "Unknown");
        assert_eq!(unsigned[0].facility_name, "Unknown");
    }
}
