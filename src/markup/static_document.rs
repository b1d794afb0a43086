use indexmap::IndexMap;
use tracing::trace;

use crate::error::EmbedResult;

use super::element::{Document, Element};
use super::selector::Selector;

/// Owned element held by the in-memory host document.
#[derive(Debug, Clone, Default)]
pub struct StaticElement {
    tag: String,
    attributes: IndexMap<String, String>,
}

impl StaticElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|entry| entry == class))
    }
}

impl Element for StaticElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Deterministic in-memory host document.
///
/// Plays the role a headless backend plays elsewhere: tests and benches run
/// against it without a real document tree. Lookup order is push order.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    elements: Vec<StaticElement>,
}

impl StaticDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, element: StaticElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: StaticElement) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for StaticDocument {
    type Elem = StaticElement;

    fn query_selector(&self, selector: &str) -> EmbedResult<Option<&StaticElement>> {
        let parsed = Selector::parse(selector)?;
        let found = self.elements.iter().find(|element| parsed.matches(element));
        if found.is_none() {
            trace!(selector, "no element matched selector");
        }
        Ok(found)
    }
}
