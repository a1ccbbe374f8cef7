use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::DocumentType;
use super::fields::ExtractedFields;
use super::report::ClaimValidationReport;

/// One physical image/PDF page of a claim submission.
///
/// Created at intake, updated once per classification pass. Owned exclusively
/// by its parent [`Claim`]; never persisted independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    /// 1-based sequence number assigned at intake. Mutable only by an
    /// explicit reorder or delete.
    pub page_number: u32,
    pub media_type: String,
    /// Path of the uploaded file this page came from.
    pub source_file: String,
    /// Raw extracted text; None until the page has been classified.
    pub text: Option<String>,
    /// Assigned type; None until the page has been classified.
    pub doc_type: Option<DocumentType>,
    /// Classification confidence in [0.0, 1.0].
    pub confidence: f32,
}

impl Page {
    pub fn new(
        page_number: u32,
        media_type: impl Into<String>,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_number,
            media_type: media_type.into(),
            source_file: source_file.into(),
            text: None,
            doc_type: None,
            confidence: 0.0,
        }
    }
}

/// A contiguous run of same-typed pages representing one physical document
/// (e.g. a 2-page prescription).
///
/// Membership is immutable after creation: regrouping replaces the whole set
/// of documents on the claim, never mutates one group in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicalDocument {
    pub id: Uuid,
    pub doc_type: DocumentType,
    /// Constituent page ids; insertion order equals page-number order.
    pub page_ids: Vec<Uuid>,
    /// Structured fields; None until extraction has run.
    pub fields: Option<ExtractedFields>,
}

impl LogicalDocument {
    pub fn new(doc_type: DocumentType, page_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            doc_type,
            page_ids,
            fields: None,
        }
    }
}

/// The claim aggregate handed through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    /// Intake timestamp, recorded at construction.
    pub submitted_at: NaiveDateTime,
    pub pages: Vec<Page>,
    pub documents: Vec<LogicalDocument>,
    pub report: Option<ClaimValidationReport>,
}

impl Claim {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now().naive_utc(),
            pages,
            documents: Vec::new(),
            report: None,
        }
    }

    /// Look up a page by id.
    pub fn page(&self, id: &Uuid) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    /// Concatenated text of a logical document's pages, in membership order.
    /// Pages without text contribute nothing.
    pub fn document_text(&self, doc: &LogicalDocument) -> String {
        join_page_texts(&self.pages, &doc.page_ids)
    }
}

/// Concatenate the texts of the identified pages, in id order, joined by
/// newlines. Unknown ids and textless pages contribute nothing.
pub fn join_page_texts(pages: &[Page], ids: &[Uuid]) -> String {
    ids.iter()
        .filter_map(|id| pages.iter().find(|p| &p.id == id))
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_is_unclassified() {
        let page = Page::new(1, "image/jpeg", "/uploads/p1.jpg");
        assert!(page.text.is_none());
        assert!(page.doc_type.is_none());
        assert_eq!(page.confidence, 0.0);
    }

    #[test]
    fn document_text_joins_in_membership_order() {
        let mut p1 = Page::new(1, "image/jpeg", "/uploads/p1.jpg");
        p1.text = Some("first".into());
        let mut p2 = Page::new(2, "image/jpeg", "/uploads/p2.jpg");
        p2.text = Some("second".into());
        let doc = LogicalDocument::new(DocumentType::Bill, vec![p1.id, p2.id]);
        let claim = Claim::new(vec![p1, p2]);
        assert_eq!(claim.document_text(&doc), "first\nsecond");
    }

    #[test]
    fn new_claim_is_timestamped_at_intake() {
        let before = Utc::now().naive_utc();
        let claim = Claim::new(vec![]);
        let after = Utc::now().naive_utc();
        assert!(claim.submitted_at >= before);
        assert!(claim.submitted_at <= after);
    }

    #[test]
    fn document_text_skips_textless_pages() {
        let p1 = Page::new(1, "application/pdf", "/uploads/p1.pdf");
        let mut p2 = Page::new(2, "application/pdf", "/uploads/p2.pdf");
        p2.text = Some("only".into());
        let doc = LogicalDocument::new(DocumentType::Report, vec![p1.id, p2.id]);
        let claim = Claim::new(vec![p1, p2]);
        assert_eq!(claim.document_text(&doc), "only");
    }
}
