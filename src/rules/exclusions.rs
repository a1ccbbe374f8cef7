use crate::config::ExclusionPolicy;
use crate::models::fields::BillLineItem;
use crate::models::report::{ExclusionReason, PolicyExclusion};

/// Flag billed line items disallowed under the policy terms.
///
/// An item is excluded when its lower-cased name contains any excluded-item
/// phrase, or its kind contains any excluded-category phrase. When both
/// match, the name match is the reported reason.
pub fn check_exclusions(items: &[&BillLineItem], policy: &ExclusionPolicy) -> Vec<PolicyExclusion> {
    items
        .iter()
        .filter_map(|item| {
            let name = item.name.to_lowercase();
            let kind = item.kind.as_str().to_lowercase();

            let reason = if policy
                .excluded_items
                .iter()
                .any(|phrase| name.contains(&phrase.to_lowercase()))
            {
                Some(ExclusionReason::ExcludedItem)
            } else if policy
                .excluded_categories
                .iter()
                .any(|phrase| kind.contains(&phrase.to_lowercase()))
            {
                Some(ExclusionReason::ExcludedCategory)
            } else {
                None
            };

            reason.map(|reason| PolicyExclusion {
                item_name: item.name.clone(),
                amount: item.effective_amount(),
                reason,
            })
        })
        .collect()
}
