use serde::Serialize;

use crate::models::enums::DocumentType;

/// Confidence assigned when no vocabulary produces a clear winner.
const UNKNOWN_CONFIDENCE: f32 = 0.1;

/// Base and cap of the winning-score confidence function.
const CONFIDENCE_BASE: f32 = 0.90;
const CONFIDENCE_PER_KEYWORD: f32 = 0.02;
const CONFIDENCE_CAP: f32 = 0.98;

/// One keyword vocabulary mapped to a document type.
struct Vocabulary {
    doc_type: DocumentType,
    name: &'static str,
    keywords: &'static [&'static str],
}

/// The three disjoint indicator vocabularies. Scoring is a membership test
/// per keyword (distinct keywords found, not occurrence count), matched
/// case-insensitively as substrings of the lower-cased page text.
static VOCABULARIES: &[Vocabulary] = &[
    Vocabulary {
        doc_type: DocumentType::Prescription,
        name: "prescription",
        keywords: &[
            "prescription",
            "rx",
            "dr.",
            "prescribed",
            "dosage",
            "tablet",
            "capsule",
            "syrup",
            "twice daily",
            "once daily",
            "refill",
            "diagnosis",
            "chief complaint",
            "advised",
            "signature",
            "take after food",
        ],
    },
    Vocabulary {
        doc_type: DocumentType::Bill,
        name: "bill",
        keywords: &[
            "invoice",
            "bill no",
            "total",
            "amount paid",
            "receipt",
            "payment",
            "gst",
            "price",
            "discount",
            "subtotal",
            "balance due",
            "cashier",
            "qty",
            "mrp",
            "net payable",
        ],
    },
    Vocabulary {
        doc_type: DocumentType::Report,
        name: "report",
        keywords: &[
            "lab report",
            "test report",
            "specimen",
            "reference range",
            "pathology",
            "sample collected",
            "haemoglobin",
            "hemoglobin",
            "platelet",
            "wbc",
            "serum",
            "analyzer",
            "interpretation",
            "observed value",
        ],
    },
];

/// Result of classifying one page's text.
#[derive(Debug, Clone, Serialize)]
pub struct PageClassification {
    pub doc_type: DocumentType,
    pub confidence: f32,
    pub reason: String,
}

/// Classify a page's raw text by keyword scoring.
///
/// The winning type is the vocabulary with the strictly highest nonzero
/// score. Ties and all-zero scores yield `Unknown` with confidence 0.1.
/// Empty text (including absorbed extraction failures) yields `Unknown`
/// with confidence 0.
pub fn classify_page(page_text: &str) -> PageClassification {
    if page_text.trim().is_empty() {
        return PageClassification {
            doc_type: DocumentType::Unknown,
            confidence: 0.0,
            reason: "no text extracted".into(),
        };
    }

    let lower = page_text.to_lowercase();
    let scored: Vec<(&Vocabulary, usize)> = VOCABULARIES
        .iter()
        .map(|v| (v, v.keywords.iter().filter(|k| lower.contains(*k)).count()))
        .collect();

    let best = scored.iter().map(|(_, s)| *s).max().unwrap_or(0);
    let mut winners = scored.iter().filter(|(_, s)| *s == best);

    match (best, winners.next(), winners.next()) {
        (1.., Some((vocab, _)), None) => {
            let confidence =
                (CONFIDENCE_BASE + CONFIDENCE_PER_KEYWORD * best as f32).min(CONFIDENCE_CAP);
            PageClassification {
                doc_type: vocab.doc_type,
                confidence,
                reason: format!("Matched {best} {} indicators", vocab.name),
            }
        }
        // All-zero scores or a tie between vocabularies.
        _ => PageClassification {
            doc_type: DocumentType::Unknown,
            confidence: UNKNOWN_CONFIDENCE,
            reason: "no clear indicators".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescription_text_classified() {
        let result = classify_page(
            "Dr. Mehta\nRx\nChief complaint: fever\nParacetamol 500mg tablet twice daily",
        );
        assert_eq!(result.doc_type, DocumentType::Prescription);
        assert!(result.confidence >= 0.90);
        assert!(result.reason.contains("prescription"));
    }

    #[test]
    fn bill_text_classified() {
        let result =
            classify_page("Invoice No: 42\nConsultation 500\nDiscount 0\nTotal: $800");
        assert_eq!(result.doc_type, DocumentType::Bill);
        assert!(result.confidence >= 0.90);
    }

    #[test]
    fn report_text_classified() {
        let result = classify_page(
            "Lab Report\nSpecimen: blood\nHaemoglobin 13.5\nReference range 12-16",
        );
        assert_eq!(result.doc_type, DocumentType::Report);
    }

    #[test]
    fn no_keywords_is_unknown_point_one() {
        let result = classify_page("completely unrelated grocery list");
        assert_eq!(result.doc_type, DocumentType::Unknown);
        assert_eq!(result.confidence, UNKNOWN_CONFIDENCE);
        assert_eq!(result.reason, "no clear indicators");
    }

    #[test]
    fn tie_is_unknown() {
        // One prescription keyword and one bill keyword.
        let result = classify_page("prescription attached with receipt");
        assert_eq!(result.doc_type, DocumentType::Unknown);
        assert_eq!(result.confidence, UNKNOWN_CONFIDENCE);
    }

    #[test]
    fn empty_text_is_unknown_zero_confidence() {
        let result = classify_page("");
        assert_eq!(result.doc_type, DocumentType::Unknown);
        assert_eq!(result.confidence, 0.0);

        let result = classify_page("   \n\t ");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn confidence_grows_with_score_and_caps() {
        let two = classify_page("Dr. Shah signature");
        let four = classify_page("Dr. Shah signature Rx dosage");
        assert!(four.confidence > two.confidence);

        // Every prescription keyword at once still caps at 0.98.
        let all = classify_page(
            "prescription rx dr. prescribed dosage tablet capsule syrup twice daily \
             once daily refill diagnosis chief complaint advised signature take after food",
        );
        assert_eq!(all.doc_type, DocumentType::Prescription);
        assert!((all.confidence - 0.98).abs() < f32::EPSILON);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classify_page("PRESCRIPTION — RX — DOSAGE");
        assert_eq!(result.doc_type, DocumentType::Prescription);
    }

    #[test]
    fn distinct_keywords_not_occurrences() {
        // "total" five times is still a score of 1.
        let result = classify_page("total total total total total");
        assert_eq!(result.doc_type, DocumentType::Bill);
        assert!((result.confidence - 0.92).abs() < 1e-6);
    }
}
