pub mod attributes;
pub mod element;
pub mod selector;
pub mod static_document;

pub use attributes::{DATA_ATTRIBUTE_PREFIX, strip_data_prefix};
pub use element::{Document, Element, attr, extract_attributes, select};
pub use selector::Selector;
pub use static_document::{StaticDocument, StaticElement};
