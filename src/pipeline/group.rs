use crate::models::claim::{LogicalDocument, Page};
use crate::models::enums::DocumentType;

/// Partition one type bucket of classified pages into logical documents.
///
/// Pages are sorted by page number ascending, then walked: a new group starts
/// wherever the current number is not exactly one greater than the previous
/// (a gap or non-monotonic input). Each maximal contiguous run becomes one
/// document preserving page order; isolated pages become singleton groups.
///
/// Contiguity here is page-number contiguity, not classification-run
/// contiguity: two same-typed documents interleaved in scan order will be
/// merged or split purely by their page numbers.
pub fn group_pages(doc_type: DocumentType, pages: &[&Page]) -> Vec<LogicalDocument> {
    let mut sorted: Vec<&Page> = pages.to_vec();
    sorted.sort_by_key(|p| p.page_number);

    let mut documents = Vec::new();
    let mut current: Vec<&Page> = Vec::new();

    for page in sorted {
        let contiguous = current
            .last()
            .is_some_and(|prev| page.page_number == prev.page_number + 1);
        if !current.is_empty() && !contiguous {
            documents.push(make_document(doc_type, &current));
            current.clear();
        }
        current.push(page);
    }
    if !current.is_empty() {
        documents.push(make_document(doc_type, &current));
    }

    documents
}

fn make_document(doc_type: DocumentType, run: &[&Page]) -> LogicalDocument {
    LogicalDocument::new(doc_type, run.iter().map(|p| p.id).collect())
}
