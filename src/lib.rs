//! chart-embed: chart capability composition and host-markup utilities.
//!
//! Two independent pieces live here. The `compose` module selects which
//! named chart capabilities are enabled and registers them into a
//! [`ComponentRegistry`] that later chart construction consults. The
//! `markup` module reads chart configuration out of host-document markup:
//! element selection and attribute extraction with `data-` prefix handling.
//!
//! [`ComponentRegistry`]: compose::ComponentRegistry

pub mod compose;
pub mod error;
pub mod markup;
pub mod telemetry;

pub use compose::{Component, ComponentRegistry, ComponentSet};
pub use error::{EmbedError, EmbedResult};
