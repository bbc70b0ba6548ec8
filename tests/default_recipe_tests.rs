//! Package and attribute resolution for each platform the default recipe supports

use ark_helper::plan::{includes_recipe, installs_package, plan, PlanOptions, SEVEN_ZIP_RECIPE};
use ark_helper::resolver::resolve;
use ark_helper::test_utils::assertions::{
    assert_installs_exactly, assert_installs_none_of, assert_plan_installs,
};
use ark_helper::test_utils::fixtures;

mod unspecified_platform {
    use super::*;

    #[test]
    fn installs_necessary_packages() {
        let resolution = resolve(&fixtures::unspecified());
        assert_installs_exactly(
            &resolution,
            &[
                "libtool", "autoconf", "unzip", "rsync", "make", "gcc", "autogen",
            ],
        );
    }

    #[test]
    fn does_not_install_gcc_cxx() {
        let resolution = resolve(&fixtures::unspecified());
        assert!(!resolution.packages.contains("gcc-c++"));
        let actions = plan(&resolution, &PlanOptions::default());
        assert!(!installs_package(&actions, "gcc-c++"));
    }

    #[test]
    fn does_not_include_seven_zip_recipe() {
        let actions = plan(&resolve(&fixtures::unspecified()), &PlanOptions::default());
        assert!(!includes_recipe(&actions, SEVEN_ZIP_RECIPE));

        // Opting in has no effect off Windows
        let actions = plan(
            &resolve(&fixtures::unspecified()),
            &PlanOptions { seven_zip: true },
        );
        assert!(!includes_recipe(&actions, SEVEN_ZIP_RECIPE));
    }

    #[test]
    fn apache_mirror() {
        let attributes = resolve(&fixtures::unspecified()).attributes;
        assert_eq!(attributes.get("apache_mirror"), Some("http://apache.mirrors.tds.net"));
    }

    #[test]
    fn prefix_root() {
        let attributes = resolve(&fixtures::unspecified()).attributes;
        assert_eq!(attributes.get("prefix_root"), Some("/usr/local"));
    }

    #[test]
    fn prefix_bin() {
        let attributes = resolve(&fixtures::unspecified()).attributes;
        assert_eq!(attributes.get("prefix_bin"), Some("/usr/local/bin"));
    }

    #[test]
    fn prefix_home() {
        let attributes = resolve(&fixtures::unspecified()).attributes;
        assert_eq!(attributes.get("prefix_home"), Some("/usr/local"));
    }

    #[test]
    fn tar_binary() {
        let attributes = resolve(&fixtures::unspecified()).attributes;
        assert_eq!(attributes.get("tar"), Some("/bin/tar"));
    }
}

#[test]
fn centos_installs_necessary_packages() {
    let resolution = resolve(&fixtures::centos());
    assert_installs_exactly(
        &resolution,
        &[
            "libtool",
            "autoconf",
            "unzip",
            "rsync",
            "make",
            "gcc",
            "xz-lzma-compat",
            "bzip2",
            "tar",
        ],
    );
}

#[test]
fn debian_installs_necessary_packages() {
    let resolution = resolve(&fixtures::ubuntu());
    assert_installs_exactly(
        &resolution,
        &[
            "libtool",
            "autoconf",
            "unzip",
            "rsync",
            "make",
            "gcc",
            "autogen",
            "shtool",
            "pkg-config",
        ],
    );
    assert_eq!(resolution.attributes.tar, "/bin/tar");
}

#[test]
fn freebsd_installs_necessary_packages() {
    let resolution = resolve(&fixtures::freebsd());
    assert_installs_exactly(
        &resolution,
        &[
            "libtool", "autoconf", "unzip", "rsync", "gmake", "gcc", "autogen", "gtar",
        ],
    );
    assert_installs_none_of(&resolution, &["make"]);
}

#[test]
fn freebsd_tar_binary() {
    assert_eq!(resolve(&fixtures::freebsd()).attributes.tar, "/usr/bin/tar");
}

#[test]
fn mac_os_x_does_not_install_packages() {
    let resolution = resolve(&fixtures::mac_os_x());
    assert_installs_none_of(
        &resolution,
        &["libtool", "autoconf", "unzip", "rsync", "make", "gcc"],
    );
    assert!(resolution.packages.is_empty());
    assert!(plan(&resolution, &PlanOptions::default()).is_empty());
}

#[test]
fn mac_os_x_tar_binary() {
    assert_eq!(resolve(&fixtures::mac_os_x()).attributes.tar, "/usr/bin/tar");
}

#[test]
fn rhel_installs_necessary_packages() {
    let resolution = resolve(&fixtures::redhat());
    let actions = plan(&resolution, &PlanOptions::default());
    assert_plan_installs(
        &actions,
        &[
            "libtool",
            "autoconf",
            "unzip",
            "rsync",
            "make",
            "gcc",
            "xz-lzma-compat",
            "bzip2",
            "tar",
        ],
    );
    assert_eq!(resolution.packages, resolve(&fixtures::centos()).packages);
}

#[test]
fn smartos_installs_necessary_packages() {
    let resolution = resolve(&fixtures::smartos());
    assert_installs_exactly(
        &resolution,
        &[
            "libtool", "autoconf", "unzip", "rsync", "make", "gcc", "gtar", "autogen",
        ],
    );
}

#[test]
fn smartos_tar_binary() {
    assert_eq!(resolve(&fixtures::smartos()).attributes.tar, "/bin/gtar");
}

#[test]
fn windows_does_not_install_packages() {
    let resolution = resolve(&fixtures::windows());
    assert_installs_none_of(
        &resolution,
        &[
            "libtool",
            "autoconf",
            "unzip",
            "rsync",
            "make",
            "gmake",
            "gcc",
            "autogen",
            "xz-lzma-compat",
            "bzip2",
            "tar",
        ],
    );
    assert!(resolution.packages.is_empty());
}

#[test]
fn windows_tar_binary() {
    assert_eq!(
        resolve(&fixtures::windows()).attributes.tar,
        r#""\7-zip\7z.exe""#
    );
}

#[test]
fn windows_seven_zip_requires_opt_in() {
    let resolution = resolve(&fixtures::windows());
    assert!(!includes_recipe(
        &plan(&resolution, &PlanOptions::default()),
        SEVEN_ZIP_RECIPE
    ));
    assert!(includes_recipe(
        &plan(&resolution, &PlanOptions { seven_zip: true }),
        SEVEN_ZIP_RECIPE
    ));
}

#[test]
fn gcc_cxx_never_required() {
    for (label, descriptor) in fixtures::all_platforms() {
        let resolution = resolve(&descriptor);
        assert!(
            !resolution.packages.contains("gcc-c++"),
            "{label} should not require gcc-c++"
        );
    }
}

#[test]
fn resolution_is_idempotent() {
    for (label, descriptor) in fixtures::all_platforms() {
        assert_eq!(resolve(&descriptor), resolve(&descriptor), "{label}");
    }
}
