use crate::{Error, ResourceKind};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

pub(crate) const SEPARATOR: &str = "--";

/// Kubeconfig path of the landscape's own garden cluster
pub fn garden_kubeconfig_path(landscape: &str) -> String {
    format!("{}-garden", landscape)
}

/// `<namespace>/<name>`, used to look up secrets of a resource
pub fn secret_identifier(namespace: &str, name: &str) -> String {
    format!("{}/{}", namespace, name)
}

/// Namespace backing a project
pub fn project_namespace(project: &str) -> String {
    format!("garden-{}", project)
}

/// `<landscape>--seed--<seed>`
pub fn seed_identifier(landscape: &str, seed: &str) -> String {
    format!(
        "{landscape}{sep}{marker}{sep}{seed}",
        landscape = landscape,
        sep = SEPARATOR,
        marker = ResourceKind::Seed.marker(),
        seed = seed,
    )
}

/// `<landscape>--shoot--<project>--<shoot>`
pub fn shoot_identifier(landscape: &str, project: &str, shoot: &str) -> String {
    format!(
        "{landscape}{sep}{marker}{sep}{project}{sep}{shoot}",
        landscape = landscape,
        sep = SEPARATOR,
        marker = ResourceKind::Shoot.marker(),
        project = project,
        shoot = shoot,
    )
}

/// Decoded kubeconfig identifier
///
/// For seeds `namespace` and `project` are empty.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Identifier {
    pub landscape: String,
    pub kind: ResourceKind,
    pub name: String,
    pub namespace: String,
    pub project: String,
}

impl Identifier {
    pub fn shoot(landscape: &str, project: &str, name: &str) -> Self {
        Self {
            landscape: landscape.to_owned(),
            kind: ResourceKind::Shoot,
            name: name.to_owned(),
            namespace: project_namespace(project),
            project: project.to_owned(),
        }
    }

    pub fn seed(landscape: &str, name: &str) -> Self {
        Self {
            landscape: landscape.to_owned(),
            kind: ResourceKind::Seed,
            name: name.to_owned(),
            namespace: String::new(),
            project: String::new(),
        }
    }

    /// Key of the secret holding this resource's kubeconfig
    pub fn secret_identifier(&self) -> String {
        secret_identifier(&self.namespace, &self.name)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResourceKind::Shoot => write!(
                f,
                "{}",
                shoot_identifier(&self.landscape, &self.project, &self.name)
            ),
            ResourceKind::Seed => write!(f, "{}", seed_identifier(&self.landscape, &self.name)),
        }
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        crate::parse(s)
    }
}
