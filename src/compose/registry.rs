use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EmbedError, EmbedResult};

use super::{Component, ComponentSet};

pub const REGISTRY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Registry of enabled chart capabilities.
///
/// Composition code registers a [`ComponentSet`] once at startup; later
/// chart construction consults the registry to decide which chart
/// configurations it can honor. Registration is idempotent: the registry
/// is a set, and re-registering a present capability is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    registered: IndexSet<Component>,
}

/// Serializable deterministic registry state, in first-registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RegistrySnapshot,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every capability in `set`, skipping those already present.
    pub fn register(&mut self, set: ComponentSet) {
        let mut added = 0usize;
        for component in set.iter() {
            if self.registered.insert(component) {
                added += 1;
            }
        }
        debug!(
            requested = set.len(),
            added,
            total = self.registered.len(),
            "registered chart components"
        );
    }

    /// Registers a single capability. Returns `true` when newly added.
    pub fn register_component(&mut self, component: Component) -> bool {
        self.registered.insert(component)
    }

    #[must_use]
    pub fn is_registered(&self, component: Component) -> bool {
        self.registered.contains(&component)
    }

    /// Registered capabilities in first-registration order.
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.registered.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Whether every capability a chart configuration depends on is registered.
    #[must_use]
    pub fn supports(&self, required: ComponentSet) -> bool {
        self.missing(required).is_empty()
    }

    /// Required capabilities that have not been registered.
    #[must_use]
    pub fn missing(&self, required: ComponentSet) -> ComponentSet {
        required
            .iter()
            .filter(|component| !self.is_registered(*component))
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            components: self.components().collect(),
        }
    }
}

impl RegistrySnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> EmbedResult<String> {
        let payload = RegistrySnapshotJsonContractV1 {
            schema_version: REGISTRY_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            EmbedError::InvalidData(format!("failed to serialize registry contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> EmbedResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<RegistrySnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: RegistrySnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            EmbedError::InvalidData(format!("failed to parse registry json payload: {e}"))
        })?;
        if payload.schema_version != REGISTRY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(EmbedError::InvalidData(format!(
                "unsupported registry snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
