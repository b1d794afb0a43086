use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};

/// Named chart capability that can be registered for later chart construction.
///
/// The set is closed: a line chart needs its controller, its line and point
/// elements, and both axis scales; the tooltip overlay is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Component {
    LineController,
    LineElement,
    PointElement,
    CategoryScale,
    LinearScale,
    Tooltip,
}

impl Component {
    /// Every registrable capability, in declaration order.
    pub const ALL: [Component; 6] = [
        Component::LineController,
        Component::LineElement,
        Component::PointElement,
        Component::CategoryScale,
        Component::LinearScale,
        Component::Tooltip,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LineController => "line-controller",
            Self::LineElement => "line-element",
            Self::PointElement => "point-element",
            Self::CategoryScale => "category-scale",
            Self::LinearScale => "linear-scale",
            Self::Tooltip => "tooltip",
        }
    }

    /// Resolves a capability from its registry name.
    pub fn from_name(name: &str) -> EmbedResult<Self> {
        Self::ALL
            .into_iter()
            .find(|component| component.name() == name)
            .ok_or_else(|| EmbedError::UnknownComponent(name.to_owned()))
    }

    pub(super) const fn bit(self) -> u8 {
        match self {
            Self::LineController => 1 << 0,
            Self::LineElement => 1 << 1,
            Self::PointElement => 1 << 2,
            Self::CategoryScale => 1 << 3,
            Self::LinearScale => 1 << 4,
            Self::Tooltip => 1 << 5,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
