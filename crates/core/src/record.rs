//! Knowledge-base records
//!
//! - [`Fatwa`]: a question and its ruling, filed under a [`CategoryId`]
//! - [`Latifa`]: a short anecdote or reflection shown alongside the fatwas
//!
//! Both carry an optional `cloud_id`, the document-store id. It is stored
//! under the `_firestoreId` key and left out entirely when absent, so seed
//! records and store records share one shape.

use crate::category::{CategoryId, Verdict};
use crate::error::{Error, Result};
use crate::field::FieldSelector;
use crate::traits::{CatalogRecord, Searchable};
use serde::{Deserialize, Serialize};

/// A fatwa entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fatwa {
    /// Application id (e.g. `"surg-12"`)
    pub id: String,
    /// Category
    pub category: CategoryId,
    /// Short title
    pub title: String,
    /// The question as asked
    pub question: String,
    /// Medical background for the ruling
    pub medical_context: String,
    /// The ruling text
    pub ruling: String,
    /// Verdict summary
    pub verdict: Verdict,
    /// Scholarly source
    pub source: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Document-store id
    #[serde(
        rename = "_firestoreId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_id: Option<String>,
}

impl Fatwa {
    /// Create a fatwa with empty context, ruling and source
    pub fn new(
        id: impl Into<String>,
        category: CategoryId,
        title: impl Into<String>,
        question: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        Fatwa {
            id: id.into(),
            category,
            title: title.into(),
            question: question.into(),
            medical_context: String::new(),
            ruling: String::new(),
            verdict,
            source: String::new(),
            tags: Vec::new(),
            cloud_id: None,
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style ruling setter
    pub fn with_ruling(mut self, ruling: impl Into<String>) -> Self {
        self.ruling = ruling.into();
        self
    }
}

impl CatalogRecord for Fatwa {
    type Id = String;

    const KEEP_ON_STORE_FAILURE: bool = true;

    /// Id, title, question and ruling must be non-empty
    fn validate(&self) -> Result<()> {
        let required = [
            ("id", &self.id),
            ("title", &self.title),
            ("question", &self.question),
            ("ruling", &self.ruling),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(Error::invalid(format!(
                "fatwa {:?}: missing {}",
                self.id, field
            ))),
            None => Ok(()),
        }
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn cloud_id(&self) -> Option<&str> {
        self.cloud_id.as_deref()
    }

    fn set_cloud_id(&mut self, cloud_id: Option<String>) {
        self.cloud_id = cloud_id;
    }
}

impl Searchable for Fatwa {
    /// Title, then question, then each tag in list order. Context, ruling
    /// and source are not searched.
    fn search_fields() -> Vec<FieldSelector<Fatwa>> {
        vec![
            FieldSelector::text("title", |f: &Fatwa| f.title.as_str()),
            FieldSelector::text("question", |f: &Fatwa| f.question.as_str()),
            FieldSelector::list("tags", |f: &Fatwa| f.tags.as_slice()),
        ]
    }
}

/// A short anecdote ("latifa")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latifa {
    /// Numeric id, assigned sequentially
    pub id: u64,
    /// Body text
    pub text: String,
    /// Optional category label, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Document-store id
    #[serde(
        rename = "_firestoreId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_id: Option<String>,
}

impl Latifa {
    /// Create a latifa with no category or source
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Latifa {
            id,
            text: text.into(),
            category: None,
            source: None,
            cloud_id: None,
        }
    }
}

impl CatalogRecord for Latifa {
    type Id = u64;

    const KEEP_ON_STORE_FAILURE: bool = false;

    fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::invalid(format!("latifa {}: missing text", self.id)));
        }
        Ok(())
    }

    fn id(&self) -> &u64 {
        &self.id
    }

    fn cloud_id(&self) -> Option<&str> {
        self.cloud_id.as_deref()
    }

    fn set_cloud_id(&mut self, cloud_id: Option<String>) {
        self.cloud_id = cloud_id;
    }
}

impl Searchable for Latifa {
    fn search_fields() -> Vec<FieldSelector<Latifa>> {
        vec![
            FieldSelector::text("text", |l: &Latifa| l.text.as_str()),
            FieldSelector::optional("category", |l: &Latifa| l.category.as_deref()),
            FieldSelector::optional("source", |l: &Latifa| l.source.as_deref()),
        ]
    }
}
