//! Kubeconfig identifiers for Gardener landscapes.
//!
//! Shoots are addressed as `<landscape>--shoot--<project>--<shoot>`,
//! seeds as `<landscape>--seed--<seed>`.

mod error;
pub use error::*;
mod kind;
pub use kind::ResourceKind;
mod identifier;
pub use identifier::{
    garden_kubeconfig_path, project_namespace, secret_identifier, seed_identifier,
    shoot_identifier, Identifier,
};
mod parse;
pub use parse::{parse, parse_with, ParseMode};
