use indexmap::IndexMap;

use crate::error::EmbedResult;

use super::attributes::strip_data_prefix;

/// Read-only view of a host-document element.
pub trait Element {
    /// Returns the attribute's value, or `None` when the element lacks it.
    ///
    /// Absence is distinct from an empty string: an attribute set to `""`
    /// is present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Host-document surface used for element lookup.
///
/// Selector validation belongs to the implementation; a malformed selector
/// fails there and the error propagates to the caller unchanged.
pub trait Document {
    type Elem: Element;

    /// First element matching `selector` in document order.
    fn query_selector(&self, selector: &str) -> EmbedResult<Option<&Self::Elem>>;
}

/// First element matching `selector`, or `None` when nothing matches.
pub fn select<'d, D: Document>(
    document: &'d D,
    selector: &str,
) -> EmbedResult<Option<&'d D::Elem>> {
    document.query_selector(selector)
}

/// Value of the attribute `name` on `element`, or `None` when absent.
#[must_use]
pub fn attr<'e, E: Element>(element: &'e E, name: &str) -> Option<&'e str> {
    element.attribute(name)
}

/// Reads each named attribute into a key-value mapping.
///
/// The lookup always uses the full attribute name; only the output key has
/// the `data-` prefix stripped. When two names collapse to the same key,
/// the later name wins.
pub fn extract_attributes<E, I, S>(element: &E, names: I) -> IndexMap<String, Option<String>>
where
    E: Element,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extracted = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        let value = element.attribute(name).map(str::to_owned);
        extracted.insert(strip_data_prefix(name).to_owned(), value);
    }
    extracted
}
