//! Gardener objects consumed by the store. Secrets come from `k8s_openapi`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Namespace of the garden cluster holding Gardener system objects
pub const GARDEN_NAMESPACE: &str = "garden";
/// Marks a shoot in [`GARDEN_NAMESPACE`] as usable as a seed
pub const ANNOTATION_SHOOT_USE_AS_SEED: &str = "shoot.gardener.cloud/use-as-seed";
/// Secret data key holding the kubeconfig
pub const DATA_KEY_KUBECONFIG: &str = "kubeconfig";

pub const GARDENER_API_VERSION: &str = "core.gardener.cloud/v1beta1";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ProjectSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectSpec {
    /// Namespace backing the project, unset until the project is reconciled
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Shoot {
    pub metadata: ObjectMeta,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectList<T> {
    pub items: Vec<T>,
}
