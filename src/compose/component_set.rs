use serde::{Deserialize, Serialize};

use super::Component;

/// Duplicate-free selection of chart capabilities.
///
/// Deployment targets pick one of the presets instead of maintaining
/// copy-pasted composition variants: `line_chart()` is the reduced set,
/// `line_chart().with_tooltip()` the full one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "Vec<Component>", from = "Vec<Component>")]
pub struct ComponentSet {
    bits: u8,
}

impl ComponentSet {
    const ALL_BITS: u8 = Component::LineController.bit()
        | Component::LineElement.bit()
        | Component::PointElement.bit()
        | Component::CategoryScale.bit()
        | Component::LinearScale.bit()
        | Component::Tooltip.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    /// Everything a basic line chart needs, tooltip overlay excluded.
    #[must_use]
    pub const fn line_chart() -> Self {
        Self::none()
            .with(Component::LineController)
            .with(Component::LineElement)
            .with(Component::PointElement)
            .with(Component::CategoryScale)
            .with(Component::LinearScale)
    }

    #[must_use]
    pub const fn with(self, component: Component) -> Self {
        Self {
            bits: self.bits | component.bit(),
        }
    }

    /// Enables the tooltip interaction overlay on top of this selection.
    #[must_use]
    pub const fn with_tooltip(self) -> Self {
        self.with(Component::Tooltip)
    }

    /// Inserts a capability. Returns `true` when it was not present before.
    pub fn insert(&mut self, component: Component) -> bool {
        let inserted = !self.contains(component);
        self.bits |= component.bit();
        inserted
    }

    #[must_use]
    pub const fn contains(self, component: Component) -> bool {
        self.bits & component.bit() != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Capabilities present in `self` but absent from `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates contained capabilities in `Component::ALL` declaration order.
    pub fn iter(self) -> impl Iterator<Item = Component> {
        Component::ALL
            .into_iter()
            .filter(move |component| self.contains(*component))
    }
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = Self::none();
        for component in iter {
            set.insert(component);
        }
        set
    }
}

impl From<ComponentSet> for Vec<Component> {
    fn from(set: ComponentSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<Component>> for ComponentSet {
    fn from(components: Vec<Component>) -> Self {
        components.into_iter().collect()
    }
}
