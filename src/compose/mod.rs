pub mod component;
pub mod component_set;
pub mod registry;

pub use component::Component;
pub use component_set::ComponentSet;
pub use registry::{
    ComponentRegistry, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshot,
    RegistrySnapshotJsonContractV1,
};
