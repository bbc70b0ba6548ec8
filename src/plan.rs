//! Converge plan for the default recipe
//!
//! Lists what the configuration engine would do for a resolution. Nothing is
//! executed here.

use crate::platform::PlatformFamily;
use crate::resolver::Resolution;
use serde::Serialize;
use std::fmt;

pub const SEVEN_ZIP_RECIPE: &str = "seven_zip";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "name", rename_all = "snake_case")]
pub enum Action {
    InstallPackage(String),
    IncludeRecipe(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// Pull in the 7-Zip recipe on Windows when no binary is configured
    pub seven_zip: bool,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::InstallPackage(name) => write!(f, "package[{name}] install"),
            Action::IncludeRecipe(name) => write!(f, "include_recipe[{name}]"),
        }
    }
}

pub fn plan(resolution: &Resolution, options: &PlanOptions) -> Vec<Action> {
    let mut actions: Vec<Action> = resolution
        .packages
        .iter()
        .map(|name| Action::InstallPackage(name.to_string()))
        .collect();

    if options.seven_zip
        && resolution.platform.family() == PlatformFamily::Windows
        && resolution.attributes.sevenzip_binary.is_none()
    {
        actions.push(Action::IncludeRecipe(SEVEN_ZIP_RECIPE.to_string()));
    }

    tracing::debug!(
        platform = %resolution.platform,
        actions = actions.len(),
        "Converge plan built"
    );
    actions
}

/// Whether the plan installs the named package
pub fn installs_package(actions: &[Action], name: &str) -> bool {
    actions
        .iter()
        .any(|a| matches!(a, Action::InstallPackage(p) if p == name))
}

/// Whether the plan includes the named recipe
pub fn includes_recipe(actions: &[Action], name: &str) -> bool {
    actions
        .iter()
        .any(|a| matches!(a, Action::IncludeRecipe(r) if r == name))
}
