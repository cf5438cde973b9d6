use crate::kubemodel::{
    Project, Shoot, ANNOTATION_SHOOT_USE_AS_SEED, DATA_KEY_KUBECONFIG, GARDEN_NAMESPACE,
};
use gardenpath::secret_identifier;
use k8s_openapi::api::core::v1::Secret;
use rustc_hash::FxHashMap;
use std::{fmt, hash::BuildHasherDefault, hash::Hash};

/// Suffix of secret namespaces named after the shoot they belong to
const KUBECONFIG_NAMESPACE_MARKER: &str = ".kubeconfig";

/// Receives per-item skip messages
pub trait Diagnostics {
    fn warn(&self, message: fmt::Arguments<'_>);
}

/// Forwards diagnostics to the `log` facade
pub struct LogDiagnostics;
impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: fmt::Arguments<'_>) {
        log::warn!("{}", message);
    }
}

/// What to do when a key is already present
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MergePolicy {
    /// Later value replaces the earlier one
    Overwrite,
    /// Earlier value is kept
    KeepFirst,
}

impl MergePolicy {
    pub fn insert<K: Eq + Hash, V>(self, map: &mut FxHashMap<K, V>, key: K, value: V) {
        match self {
            Self::Overwrite => {
                map.insert(key, value);
            }
            Self::KeepFirst => {
                map.entry(key).or_insert(value);
            }
        }
    }
}

fn with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
}

/// Name of the shoot a kubeconfig secret belongs to
fn owning_shoot(secret: &Secret, namespace: &str) -> Option<String> {
    match secret.metadata.owner_references.as_deref() {
        Some([owner, ..]) if owner.kind == "Shoot" => Some(owner.name.clone()),
        _ => namespace
            .find(KUBECONFIG_NAMESPACE_MARKER)
            .map(|idx| namespace[..idx].to_owned()),
    }
}

/// Index kubeconfig secrets by `<namespace>/<shoot>`
///
/// Secrets without kubeconfig, or which can't be tied to a shoot, are skipped.
/// If multiple secrets map to the same key, the last one wins.
pub fn secrets_by_shoot(
    diagnostics: &dyn Diagnostics,
    secrets: Vec<Secret>,
) -> FxHashMap<String, Secret> {
    let mut out = with_capacity(secrets.len());
    for secret in secrets {
        let namespace = secret.metadata.namespace.clone().unwrap_or_default();
        let name = secret.metadata.name.as_deref().unwrap_or_default();

        let has_kubeconfig = secret
            .data
            .as_ref()
            .map(|data| data.contains_key(DATA_KEY_KUBECONFIG))
            .unwrap_or(false);
        if !has_kubeconfig {
            diagnostics.warn(format_args!(
                "Secret {}/{} does not contain a kubeconfig. Skipping.",
                namespace, name
            ));
            continue;
        }

        let shoot = match owning_shoot(&secret, &namespace) {
            Some(shoot) => shoot,
            None => {
                diagnostics.warn(format_args!(
                    "Secret {}/{} could not be associated with any Shoot. Skipping.",
                    namespace, name
                ));
                continue;
            }
        };
        MergePolicy::Overwrite.insert(&mut out, secret_identifier(&namespace, &shoot), secret);
    }
    out
}

/// Map project namespaces to project names, first project wins
pub fn projects_by_namespace(projects: &[Project]) -> FxHashMap<String, String> {
    let mut out = with_capacity(projects.len());
    for project in projects {
        if let Some(namespace) = &project.spec.namespace {
            MergePolicy::KeepFirst.insert(
                &mut out,
                namespace.clone(),
                project.metadata.name.clone(),
            );
        }
    }
    out
}

/// Whether shoot is registered as a seed ("shooted seed")
pub fn is_shooted_seed(shoot: &Shoot) -> bool {
    shoot.metadata.namespace.as_deref() == Some(GARDEN_NAMESPACE)
        && shoot
            .metadata
            .annotations
            .get(ANNOTATION_SHOOT_USE_AS_SEED)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
}
