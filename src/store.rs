use crate::{
    associate::{is_shooted_seed, projects_by_namespace, secrets_by_shoot, Diagnostics},
    client::Snapshot,
};
use gardenpath::{garden_kubeconfig_path, secret_identifier, Identifier};

/// Kubeconfig exposed by a Gardener store
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub enum Entry {
    /// Landscape's own garden cluster
    Garden(String),
    Resource(Identifier),
}

impl Entry {
    pub fn path(&self) -> String {
        match self {
            Self::Garden(path) => path.clone(),
            Self::Resource(id) => id.to_string(),
        }
    }
}

/// List every kubeconfig the landscape gives access to
///
/// Shoots need both a kubeconfig secret and a known project, shooted seeds
/// are listed additionally as seeds.
pub fn resolve(landscape: &str, snapshot: Snapshot, diagnostics: &dyn Diagnostics) -> Vec<Entry> {
    let projects = projects_by_namespace(&snapshot.projects);
    let secrets = secrets_by_shoot(diagnostics, snapshot.secrets);

    let mut out = vec![Entry::Garden(garden_kubeconfig_path(landscape))];
    for shoot in snapshot.shoots.iter() {
        let name = &shoot.metadata.name;
        let namespace = shoot.metadata.namespace.as_deref().unwrap_or_default();

        if secrets.contains_key(&secret_identifier(namespace, name)) {
            match projects.get(namespace) {
                Some(project) => out.push(Entry::Resource(Identifier::shoot(
                    landscape, project, name,
                ))),
                None => diagnostics.warn(format_args!(
                    "Shoot {}/{} is not in a project namespace. Skipping.",
                    namespace, name
                )),
            }
        }
        if is_shooted_seed(shoot) {
            out.push(Entry::Resource(Identifier::seed(landscape, name)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associate::tests::Recorded;
    use serde_json::json;

    #[test]
    fn resolves_landscape() {
        let snapshot = Snapshot {
            secrets: serde_json::from_value(json!([
                {
                    "apiVersion": "v1",
                    "kind": "Secret",
                    "metadata": {
                        "name": "etcd.kubeconfig",
                        "namespace": "garden-core",
                        "ownerReferences": [{
                            "apiVersion": "core.gardener.cloud/v1beta1",
                            "kind": "Shoot",
                            "name": "etcd",
                            "uid": "0b5e0f5c-8f8e-4a7b-a5c4-7cf2d0e4ad01",
                        }],
                    },
                    "data": { "kubeconfig": "a3ViZWNvbmZpZw==" },
                },
                {
                    "apiVersion": "v1",
                    "kind": "Secret",
                    "metadata": {
                        "name": "orphan.kubeconfig",
                        "namespace": "orphaned",
                        "ownerReferences": [{
                            "apiVersion": "core.gardener.cloud/v1beta1",
                            "kind": "Shoot",
                            "name": "orphan",
                            "uid": "8e7a4c9c-0e0a-4a5f-9d43-1d4a5f9b3c02",
                        }],
                    },
                    "data": { "kubeconfig": "a3ViZWNvbmZpZw==" },
                },
            ]))
            .unwrap(),
            projects: serde_json::from_value(json!([
                { "metadata": { "name": "core" }, "spec": { "namespace": "garden-core" } },
            ]))
            .unwrap(),
            shoots: serde_json::from_value(json!([
                { "metadata": { "name": "etcd", "namespace": "garden-core" } },
                { "metadata": { "name": "no-secret", "namespace": "garden-core" } },
                { "metadata": { "name": "orphan", "namespace": "orphaned" } },
                {
                    "metadata": {
                        "name": "aws-eu1",
                        "namespace": "garden",
                        "annotations": { "shoot.gardener.cloud/use-as-seed": "true" },
                    },
                },
            ]))
            .unwrap(),
        };

        let diagnostics = Recorded::default();
        let paths: Vec<_> = resolve("dev", snapshot, &diagnostics)
            .iter()
            .map(Entry::path)
            .collect();
        assert_eq!(
            paths,
            vec!["dev-garden", "dev--shoot--core--etcd", "dev--seed--aws-eu1"]
        );
        assert_eq!(
            *diagnostics.0.borrow(),
            vec!["Shoot orphaned/orphan is not in a project namespace. Skipping."]
        );
    }

    #[test]
    fn entries_parse_back() {
        let entries = resolve("dev", Snapshot::default(), &Recorded::default());
        assert_eq!(entries, vec![Entry::Garden("dev-garden".to_owned())]);

        let shoot = Entry::Resource(Identifier::shoot("dev", "core", "etcd"));
        assert_eq!(
            gardenpath::parse(&shoot.path()).unwrap(),
            Identifier::shoot("dev", "core", "etcd")
        );
    }
}
