//! Per-course bucketing of file changes by category
//!
//! A fresh aggregator is built for every course. Each event lands in exactly
//! one bucket and buckets keep arrival order.

use std::collections::BTreeMap;

use super::category::{Category, CategoryClassifier};
use super::events::FileChangeEvent;

#[derive(Debug, Clone)]
pub struct FileAggregator<'a> {
    classifier: &'a CategoryClassifier,
    buckets: BTreeMap<Category, Vec<&'a FileChangeEvent>>,
}

impl<'a> FileAggregator<'a> {
    /// Create an aggregator with an empty bucket for every recognized category
    pub fn new(classifier: &'a CategoryClassifier) -> Self {
        let buckets = classifier
            .categories()
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        Self { classifier, buckets }
    }

    pub fn add(&mut self, event: &'a FileChangeEvent) {
        let category = self.classifier.classify(&event.module_modname);
        // classify() only returns recognized categories, all of which have a bucket
        self.buckets.entry(category).or_default().push(event);
    }

    pub fn extend<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a FileChangeEvent>,
    {
        for event in events {
            self.add(event);
        }
    }

    pub fn bucket(&self, category: Category) -> Option<&[&'a FileChangeEvent]> {
        self.buckets.get(&category).map(Vec::as_slice)
    }

    /// All buckets in render order, empty ones included
    pub fn buckets(&self) -> impl Iterator<Item = (Category, &[&'a FileChangeEvent])> + '_ {
        self.buckets
            .iter()
            .map(|(category, events)| (*category, events.as_slice()))
    }

    pub fn total_files(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn populated_buckets(&self) -> usize {
        self.buckets.values().filter(|events| !events.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(modname: &str, filename: &str) -> FileChangeEvent {
        FileChangeEvent::new(modname, "file", filename)
    }

    #[test]
    fn test_every_key_present_when_empty() {
        let classifier = CategoryClassifier::default();
        let aggregator = FileAggregator::new(&classifier);

        let keys: Vec<Category> = aggregator.buckets().map(|(c, _)| c).collect();
        assert_eq!(keys, Category::ALL.to_vec());
        assert!(aggregator.buckets().all(|(_, events)| events.is_empty()));
        assert_eq!(aggregator.total_files(), 0);
    }

    #[test]
    fn test_add_preserves_order_within_bucket() {
        let classifier = CategoryClassifier::default();
        let files = vec![
            event("resource", "a.pdf"),
            event("forum", "post"),
            event("resource", "b.pdf"),
            event("resource", "c.pdf"),
        ];

        let mut aggregator = FileAggregator::new(&classifier);
        aggregator.extend(&files);

        let names: Vec<&str> = aggregator
            .bucket(Category::Resource)
            .unwrap()
            .iter()
            .map(|f| f.content_filename.as_str())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(aggregator.bucket(Category::Forum).unwrap().len(), 1);
        assert_eq!(aggregator.populated_buckets(), 2);
    }

    #[test]
    fn test_unknown_module_lands_in_misc() {
        let classifier = CategoryClassifier::default();
        let files = vec![event("page", "Intro"), event("url", "Link")];

        let mut aggregator = FileAggregator::new(&classifier);
        aggregator.extend(&files);

        assert_eq!(aggregator.bucket(Category::Misc).unwrap().len(), 2);
        assert_eq!(aggregator.total_files(), files.len());
    }

    #[test]
    fn test_restricted_set_only_has_its_buckets() {
        let classifier = CategoryClassifier::new(&[Category::Quiz]);
        let files = vec![event("quiz", "Quiz 1"), event("assign", "HW1.pdf")];

        let mut aggregator = FileAggregator::new(&classifier);
        aggregator.extend(&files);

        assert!(aggregator.bucket(Category::Assign).is_none());
        assert_eq!(aggregator.bucket(Category::Quiz).unwrap().len(), 1);
        assert_eq!(aggregator.bucket(Category::Misc).unwrap().len(), 1);
    }
}
