//! Markup contract check.
//!
//! Filtering only works when every trigger's filter key exactly matches the
//! category key of some content element. Nothing enforces that in the
//! markup, so a typo in either attribute silently produces an empty gallery.
//! The audit reports such mismatches at startup; it never changes behavior.

use std::collections::BTreeSet;

use gallery_types::{FilterConfig, FilterKey};

use crate::dom::Dom;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupReport {
    pub trigger_count: usize,
    pub content_count: usize,
    /// Filter keys no content element carries
    pub unmatched_filters: Vec<String>,
    /// Category keys no trigger selects
    pub orphan_categories: Vec<String>,
    /// Triggers with an absent or empty filter key
    pub keyless_triggers: usize,
    /// Content elements with an absent or empty category key
    pub keyless_content: usize,
    pub wrapper_present: bool,
}

impl MarkupReport {
    /// A missing wrapper only counts when there are triggers to reveal it.
    pub fn is_clean(&self) -> bool {
        self.unmatched_filters.is_empty()
            && self.orphan_categories.is_empty()
            && self.keyless_triggers == 0
            && self.keyless_content == 0
            && (self.wrapper_present || self.trigger_count == 0)
    }

    pub fn log(&self) {
        for key in &self.unmatched_filters {
            tracing::warn!(filter = %key, "filter key matches no gallery section");
        }
        for key in &self.orphan_categories {
            tracing::warn!(category = %key, "gallery section has no filter button");
        }
        if self.keyless_triggers > 0 {
            tracing::warn!(count = self.keyless_triggers, "filter buttons without a filter key");
        }
        if self.keyless_content > 0 {
            tracing::warn!(count = self.keyless_content, "gallery sections without a category key");
        }
        if !self.wrapper_present && self.trigger_count > 0 {
            tracing::warn!("gallery wrapper element is missing");
        }
    }
}

/// Compare trigger keys against content keys.
///
/// Keys are collected with the same exact-match rules the filter uses.
pub fn audit<D: Dom>(dom: &D, config: &FilterConfig) -> MarkupReport {
    let triggers = dom.query_all(&config.trigger_selector);
    let contents = dom.query_all(&config.content_selector);

    let mut report = MarkupReport {
        trigger_count: triggers.len(),
        content_count: contents.len(),
        wrapper_present: dom.element_by_id(&config.wrapper_id).is_some(),
        ..MarkupReport::default()
    };

    let mut filters = BTreeSet::new();
    for trigger in &triggers {
        match FilterKey::from_attribute(dom.attribute(trigger, &config.filter_attribute)) {
            Some(key) => {
                filters.insert(key);
            }
            None => report.keyless_triggers += 1,
        }
    }

    let mut categories = BTreeSet::new();
    for content in &contents {
        match FilterKey::from_attribute(dom.attribute(content, &config.category_attribute)) {
            Some(key) => {
                categories.insert(key);
            }
            None => report.keyless_content += 1,
        }
    }

    report.unmatched_filters = filters
        .difference(&categories)
        .map(|key| key.as_str().to_string())
        .collect();
    report.orphan_categories = categories
        .difference(&filters)
        .map(|key| key.as_str().to_string())
        .collect();
    report
}
