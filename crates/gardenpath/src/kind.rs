use std::fmt::{self, Display};

/// Kind of Gardener resource a kubeconfig grants access to
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum ResourceKind {
    /// Tenant cluster
    Shoot,
    /// Cluster hosting shoot control planes
    Seed,
}

impl ResourceKind {
    /// Marker used inside encoded identifiers
    pub fn marker(self) -> &'static str {
        match self {
            Self::Shoot => "shoot",
            Self::Seed => "seed",
        }
    }

    /// Number of `--` separated segments in an identifier of this kind
    pub fn segments(self) -> usize {
        match self {
            Self::Shoot => 4,
            Self::Seed => 3,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shoot => write!(f, "Shoot"),
            Self::Seed => write!(f, "Seed"),
        }
    }
}
