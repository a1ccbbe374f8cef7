//! Four-stage pipeline: classify → group → extract → evaluate.
//!
//! Each stage takes the previous stage's typed artifact, so tests can invoke
//! any stage independently with a hand-built fixture instead of relying on
//! mutation order.

use std::path::Path;

use crate::models::claim::{join_page_texts, Claim, LogicalDocument, Page};
use crate::models::enums::DocumentType;
use crate::rules::RuleEngine;

use super::classify::classify_page;
use super::extraction::extract_fields;
use super::group::group_pages;
use super::textsource::TextSource;

/// Stage 1 output: every page carries text, type, and confidence.
pub struct ClassifiedPages(pub Vec<Page>);

/// Stage 2 output: logical documents over the classified pages.
pub struct GroupedDocuments(pub Vec<LogicalDocument>);

/// Stage 3 output: documents with their structured fields populated.
pub struct ExtractedDocuments(pub Vec<LogicalDocument>);

/// Classify every page: pull its text through the source (failures are
/// absorbed as empty text, never fatal) and score it against the keyword
/// vocabularies.
pub fn classify_pages<S: TextSource>(source: &S, mut pages: Vec<Page>) -> ClassifiedPages {
    for page in &mut pages {
        let text = match source.extract(Path::new(&page.source_file), &page.media_type) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    page_id = %page.id,
                    source_file = %page.source_file,
                    error = %err,
                    "Text extraction failed, treating page as empty"
                );
                String::new()
            }
        };

        let classification = classify_page(&text);
        tracing::debug!(
            page_id = %page.id,
            doc_type = classification.doc_type.as_str(),
            confidence = classification.confidence,
            reason = %classification.reason,
            "Page classified"
        );

        page.text = Some(text);
        page.doc_type = Some(classification.doc_type);
        page.confidence = classification.confidence;
    }
    ClassifiedPages(pages)
}

/// Group classified pages into logical documents, one type bucket at a time.
/// Unknown-typed pages produce no document; they stay on the claim as
/// low-confidence input for the reviewer.
pub fn group_documents(pages: &ClassifiedPages) -> GroupedDocuments {
    let mut documents = Vec::new();
    for doc_type in [
        DocumentType::Prescription,
        DocumentType::Bill,
        DocumentType::Report,
    ] {
        let bucket: Vec<&Page> = pages
            .0
            .iter()
            .filter(|p| p.doc_type == Some(doc_type))
            .collect();
        documents.extend(group_pages(doc_type, &bucket));
    }
    GroupedDocuments(documents)
}

/// Run field extraction over each document's concatenated page text.
pub fn extract_documents(
    pages: &ClassifiedPages,
    documents: GroupedDocuments,
) -> ExtractedDocuments {
    let mut documents = documents.0;
    for doc in &mut documents {
        let text = join_page_texts(&pages.0, &doc.page_ids);
        doc.fields = extract_fields(doc.doc_type, &text);
    }
    ExtractedDocuments(documents)
}

/// Run the full pipeline over a claim and return the updated aggregate:
/// classified pages, wholly regrouped documents, populated fields, and a
/// fresh validation report.
///
/// Documents are always replaced as a set: reclassifying even one page
/// regroups the entire claim, keeping group boundaries consistent.
pub fn process_claim<S: TextSource>(source: &S, engine: &RuleEngine, claim: Claim) -> Claim {
    let mut claim = claim;
    let pages = std::mem::take(&mut claim.pages);

    let classified = classify_pages(source, pages);
    let grouped = group_documents(&classified);
    let extracted = extract_documents(&classified, grouped);

    claim.pages = classified.0;
    claim.documents = extracted.0;
    claim.report = Some(engine.evaluate(&claim));

    tracing::info!(
        claim_id = %claim.id,
        pages = claim.pages.len(),
        documents = claim.documents.len(),
        "Claim processed"
    );
    claim
}
