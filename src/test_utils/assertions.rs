//! Assertion helpers over resolutions and converge plans

use crate::plan::{installs_package, Action};
use crate::resolver::Resolution;
use std::collections::BTreeSet;

/// Asserts that the resolution requires exactly `expected`, nothing more
pub fn assert_installs_exactly(resolution: &Resolution, expected: &[&str]) {
    let actual: BTreeSet<&str> = resolution.packages.iter().collect();
    let expected: BTreeSet<&str> = expected.iter().copied().collect();
    assert_eq!(
        actual, expected,
        "Package set mismatch for {}.\nActual: {actual:?}\nExpected: {expected:?}",
        resolution.platform
    );
}

/// Asserts that none of `names` is required
pub fn assert_installs_none_of(resolution: &Resolution, names: &[&str]) {
    for name in names {
        assert!(
            !resolution.packages.contains(name),
            "Expected {} not to require package {name}",
            resolution.platform
        );
    }
}

/// Asserts that the plan installs each of `names`
pub fn assert_plan_installs(actions: &[Action], names: &[&str]) {
    for name in names {
        assert!(
            installs_package(actions, name),
            "Expected plan to install {name}, got: {actions:?}"
        );
    }
}

/// Asserts that a Result is Ok and returns the value
pub fn assert_ok<T, E>(result: Result<T, E>) -> T
where
    E: std::fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok result, but got Err: {e:?}"),
    }
}

/// Asserts that a Result is Err and returns the error
pub fn assert_err<T, E>(result: Result<T, E>) -> E
where
    T: std::fmt::Debug,
{
    match result {
        Ok(value) => panic!("Expected Err result, but got Ok: {value:?}"),
        Err(e) => e,
    }
}
