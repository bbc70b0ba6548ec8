//! Platform package and attribute resolution for the ark archive helper.
//!
//! Given a platform, [`resolver::resolve`] returns the OS packages the helper
//! needs and the default attributes it exposes (install prefixes, archive
//! tool location, Apache mirror). Lookups are total: unknown platforms get
//! the default row.

pub mod attributes;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod plan;
pub mod platform;
pub mod resolver;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

pub use attributes::AttributeDefaults;
pub use platform::{PlatformDescriptor, PlatformFamily};
pub use resolver::{resolve, resolve_with, PackageSet, Resolution, ResolveContext};
