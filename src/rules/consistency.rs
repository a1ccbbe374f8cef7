use std::collections::HashMap;

use crate::models::report::VisitReasonConsistency;

/// Tokens at or below this length carry no signal (articles, "for", etc).
const MIN_TOKEN_LEN: usize = 4;

/// Check that prescription and bill visit reasons agree.
///
/// Reasons are lower-cased and tokenized on whitespace; tokens longer than
/// 3 characters are counted across the combined set. The claim is consistent
/// iff at least one token appears more than once. Fewer than one prescription
/// or one bill reason means there is not enough data to contradict, which is
/// trivially consistent.
pub fn check_visit_reasons(
    prescription_reasons: &[String],
    bill_reasons: &[String],
) -> VisitReasonConsistency {
    let prescription_reasons = normalize(prescription_reasons);
    let bill_reasons = normalize(bill_reasons);

    if prescription_reasons.is_empty() || bill_reasons.is_empty() {
        return VisitReasonConsistency {
            is_consistent: true,
            prescription_reasons,
            bill_reasons,
            shared_keywords: Vec::new(),
        };
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for reason in prescription_reasons.iter().chain(bill_reasons.iter()) {
        for token in reason.split_whitespace() {
            if token.len() >= MIN_TOKEN_LEN {
                *counts.entry(token).or_default() += 1;
            }
        }
    }

    let mut shared_keywords: Vec<String> = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(token, _)| token.to_string())
        .collect();
    shared_keywords.sort();

    VisitReasonConsistency {
        is_consistent: !shared_keywords.is_empty(),
        prescription_reasons,
        bill_reasons,
        shared_keywords,
    }
}

fn normalize(reasons: &[String]) -> Vec<String> {
    reasons
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasons(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shared_token_is_consistent() {
        let result = check_visit_reasons(
            &reasons(&["Cardiology consultation"]),
            &reasons(&["cardiology checkup"]),
        );
        assert!(result.is_consistent);
        assert_eq!(result.shared_keywords, vec!["cardiology"]);
    }

    #[test]
    fn disjoint_reasons_are_inconsistent() {
        let result = check_visit_reasons(
            &reasons(&["dental cleaning"]),
            &reasons(&["fever treatment"]),
        );
        assert!(!result.is_consistent);
        assert!(result.shared_keywords.is_empty());
        assert_eq!(result.prescription_reasons, vec!["dental cleaning"]);
        assert_eq!(result.bill_reasons, vec!["fever treatment"]);
    }

    #[test]
    fn short_tokens_ignored() {
        // "for" and "eye" are too short to count as shared signal.
        let result = check_visit_reasons(
            &reasons(&["for eye pain"]),
            &reasons(&["for eye ache"]),
        );
        assert!(!result.is_consistent);
    }

    #[test]
    fn no_bill_reasons_is_trivially_consistent() {
        let result = check_visit_reasons(&reasons(&["knee pain"]), &[]);
        assert!(result.is_consistent);
        assert!(result.shared_keywords.is_empty());
    }

    #[test]
    fn no_prescription_reasons_is_trivially_consistent() {
        let result = check_visit_reasons(&[], &reasons(&["knee pain"]));
        assert!(result.is_consistent);
    }

    #[test]
    fn blank_reasons_are_dropped() {
        let result = check_visit_reasons(&reasons(&["  ", ""]), &reasons(&["fever"]));
        assert!(result.prescription_reasons.is_empty());
        assert!(result.is_consistent);
    }

    #[test]
    fn reasons_are_lowercased_in_output() {
        let result = check_visit_reasons(
            &reasons(&["Chest Pain"]),
            &reasons(&["chest examination"]),
        );
        assert_eq!(result.prescription_reasons, vec!["chest pain"]);
        assert!(result.is_consistent);
        assert_eq!(result.shared_keywords, vec!["chest"]);
    }
}
