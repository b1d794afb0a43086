use smallvec::SmallVec;

use crate::error::{EmbedError, EmbedResult};

use super::static_document::StaticElement;

/// Parsed compound selector: optional tag name plus `#id` and `.class` tokens.
///
/// Only the compound subset is supported (`canvas#latency.chart`).
/// Combinators, attribute selectors, pseudo-classes, and whitespace are
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: SmallVec<[String; 2]>,
}

impl Selector {
    pub fn parse(input: &str) -> EmbedResult<Self> {
        if input.is_empty() {
            return Err(invalid(input, "selector is empty"));
        }

        let mut selector = Self::default();
        let mut rest = input;

        if !rest.starts_with(['#', '.']) {
            let end = rest.find(['#', '.']).unwrap_or(rest.len());
            let (tag, remainder) = rest.split_at(end);
            validate_name(input, tag)?;
            selector.tag = Some(tag.to_owned());
            rest = remainder;
        }

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let token = &rest[1..];
            let end = token.find(['#', '.']).unwrap_or(token.len());
            let (name, remainder) = token.split_at(end);
            match marker {
                b'#' => {
                    if name.is_empty() {
                        return Err(invalid(input, "empty id token"));
                    }
                    if selector.id.is_some() {
                        return Err(invalid(input, "multiple id tokens"));
                    }
                    validate_name(input, name)?;
                    selector.id = Some(name.to_owned());
                }
                b'.' => {
                    if name.is_empty() {
                        return Err(invalid(input, "empty class token"));
                    }
                    validate_name(input, name)?;
                    selector.classes.push(name.to_owned());
                }
                _ => unreachable!("tokens start at a `#` or `.` marker"),
            }
            rest = remainder;
        }

        Ok(selector)
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether `element` satisfies every token of this selector.
    #[must_use]
    pub fn matches(&self, element: &StaticElement) -> bool {
        if self.tag.as_deref().is_some_and(|tag| element.tag() != tag) {
            return false;
        }
        if self
            .id
            .as_deref()
            .is_some_and(|id| element.id() != Some(id))
        {
            return false;
        }
        self.classes
            .iter()
            .all(|class| element.has_class(class))
    }
}

fn invalid(selector: &str, reason: &str) -> EmbedError {
    EmbedError::InvalidSelector {
        selector: selector.to_owned(),
        reason: reason.to_owned(),
    }
}

fn validate_name(selector: &str, name: &str) -> EmbedResult<()> {
    match name
        .chars()
        .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-' && *ch != '_')
    {
        Some(ch) => Err(invalid(selector, &format!("unsupported character `{ch}`"))),
        None => Ok(()),
    }
}
