//! Field selectors
//!
//! A [`FieldSelector`] names one record attribute and knows how to read it.
//! Search builds a record's searchable text from an ordered list of
//! selectors, so the matcher never depends on a concrete record shape.
//!
//! A selector yields zero or more values: a plain text field yields one,
//! an optional field yields zero or one, a tag list yields one per tag.

use std::fmt;
use std::sync::Arc;

type Extractor<R> = Arc<dyn for<'a> Fn(&'a R) -> Vec<&'a str> + Send + Sync>;

fn boxed<R, F>(extract: F) -> Extractor<R>
where
    F: for<'a> Fn(&'a R) -> Vec<&'a str> + Send + Sync + 'static,
{
    Arc::new(extract)
}

/// Named accessor for a searchable record attribute
pub struct FieldSelector<R> {
    name: &'static str,
    extract: Extractor<R>,
}

impl<R: 'static> FieldSelector<R> {
    /// Selector yielding any number of values in order
    pub fn new<F>(name: &'static str, extract: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Vec<&'a str> + Send + Sync + 'static,
    {
        FieldSelector {
            name,
            extract: boxed(extract),
        }
    }

    /// Selector over a single text field
    pub fn text<F>(name: &'static str, extract: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        FieldSelector {
            name,
            extract: boxed(move |record| vec![extract(record)]),
        }
    }

    /// Selector over an optional text field; `None` contributes nothing
    pub fn optional<F>(name: &'static str, extract: F) -> Self
    where
        F: Fn(&R) -> Option<&str> + Send + Sync + 'static,
    {
        FieldSelector {
            name,
            extract: boxed(move |record| extract(record).into_iter().collect()),
        }
    }

    /// Selector over a list field; each element is one value, in list order
    pub fn list<F>(name: &'static str, extract: F) -> Self
    where
        F: Fn(&R) -> &[String] + Send + Sync + 'static,
    {
        FieldSelector {
            name,
            extract: boxed(move |record| extract(record).iter().map(String::as_str).collect()),
        }
    }
}

impl<R> FieldSelector<R> {
    /// Field name, used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field's values from a record
    pub fn values<'a>(&self, record: &'a R) -> Vec<&'a str> {
        (self.extract)(record)
    }
}

impl<R> Clone for FieldSelector<R> {
    fn clone(&self) -> Self {
        FieldSelector {
            name: self.name,
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<R> fmt::Debug for FieldSelector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSelector")
            .field("name", &self.name)
            .finish()
    }
}
