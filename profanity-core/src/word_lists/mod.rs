//! Word-list sources and their compiled patterns.
//!
//! A *source* is one named list of profane words or phrases (one built-in `*.txt` file,
//! a manual list supplied by a caller, or a list fetched from a URL). Each source is
//! compiled exactly once into a single case-insensitive alternation wrapped in word
//! boundaries, so the pipeline can run one `replace_all` per source.
//!
//! * `compiler`: turns a word set into a [`ProfaneSourceFilter`].
//! * `repository`: discovers, loads and caches the built-in sources.

pub mod compiler;
pub mod repository;

use indexmap::IndexMap;
use std::sync::Arc;

pub use compiler::{build_pattern, parse_word_list, ProfaneSourceFilter};
pub use repository::WordListRepository;

/// An ordered collection of compiled sources, keyed by source name.
///
/// Iteration order is the order the pipeline applies the sources in: built-ins sorted by
/// file name, followed by call-scoped sources in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    sources: IndexMap<String, Arc<ProfaneSourceFilter>>,
}

impl SourceSet {
    pub fn new(sources: Vec<Arc<ProfaneSourceFilter>>) -> Self {
        let mut set = Self::default();
        for source in sources {
            set.insert(source);
        }
        set
    }

    /// Adds a source, replacing any existing source with the same name in place.
    pub fn insert(&mut self, source: Arc<ProfaneSourceFilter>) {
        self.sources.insert(source.source_name.clone(), source);
    }

    /// Returns a new set with `additional` merged after the current sources.
    /// `self` is left untouched, so cached sets never see call-scoped lists.
    pub fn merged(&self, additional: &[Arc<ProfaneSourceFilter>]) -> SourceSet {
        let mut merged = self.clone();
        for source in additional {
            merged.insert(Arc::clone(source));
        }
        merged
    }

    pub fn get(&self, source_name: &str) -> Option<&Arc<ProfaneSourceFilter>> {
        self.sources.get(source_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ProfaneSourceFilter>> {
        self.sources.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a Arc<ProfaneSourceFilter>;
    type IntoIter = indexmap::map::Values<'a, String, Arc<ProfaneSourceFilter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, words: &[&str]) -> Arc<ProfaneSourceFilter> {
        Arc::new(ProfaneSourceFilter::from_words(name, words.iter().copied()).unwrap())
    }

    #[test]
    fn merged_appends_without_touching_the_original() {
        let base = SourceSet::new(vec![source("a", &["one"]), source("b", &["two"])]);
        let merged = base.merged(&[source("manual(1)", &["three"])]);

        assert_eq!(base.names(), vec!["a", "b"]);
        assert_eq!(merged.names(), vec!["a", "b", "manual(1)"]);
    }

    #[test]
    fn insert_replaces_same_name_in_place() {
        let mut set = SourceSet::new(vec![source("a", &["one"]), source("b", &["two"])]);
        set.insert(source("a", &["uno"]));

        assert_eq!(set.names(), vec!["a", "b"]);
        assert!(set.get("a").unwrap().words.contains("uno"));
    }

    #[test]
    fn lookup_by_name_and_iteration_follow_insertion_order() {
        let set = SourceSet::new(vec![source("b", &["two"]), source("a", &["one"]), source("b", &["dos"])]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.names(), vec!["b", "a"]);
        assert!(set.get("b").unwrap().words.contains("dos"));
        assert!(set.get("c").is_none());
        let order: Vec<_> = set.iter().map(|s| s.source_name.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
