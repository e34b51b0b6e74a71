use crate::common::*;
use crate::{assert_exists, assert_missing, assert_output_contains};

#[test]
fn project_config_sets_manifest_location() {
    let env = TestEnv::builder()
        .with_outputs("build", ALL_OUTPUTS)
        .with_file("previous.json", &first_build())
        .with_file("build/mix-manifest.json", &second_build())
        .with_project_config("manifest = \"build/mix-manifest.json\"\n")
        .build();

    let result = env.run(&["prune", "--previous", "previous.json"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_missing!(env, "build/js/app.1a2b.js");
    assert_exists!(env, "build/js/vendor.9f8e.js");
}

#[test]
fn cli_flags_override_project_config() {
    let env = TestEnv::builder()
        .with_outputs("public", ALL_OUTPUTS)
        .with_file("previous.json", &first_build())
        .with_file("public/manifest.json", &second_build())
        .with_project_config("manifest = \"elsewhere/manifest.json\"\n")
        .build();

    let result = env.run(&[
        "prune",
        "--previous",
        "previous.json",
        "--manifest",
        "public/manifest.json",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_missing!(env, "public/js/app.1a2b.js");
}

#[test]
fn env_overrides_project_config() {
    let env = TestEnv::builder()
        .with_outputs("public", ALL_OUTPUTS)
        .with_file("previous.json", &first_build())
        .with_file("public/manifest.json", &second_build())
        .with_project_config("manifest = \"elsewhere/manifest.json\"\n")
        .build();

    let result = env.run_with_env(
        &["prune", "--previous", "previous.json"],
        &[("ASSETPRUNE_MANIFEST", "public/manifest.json")],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert_missing!(env, "public/js/app.1a2b.js");
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::builder()
        .with_file("previous.json", &first_build())
        .with_file("public/manifest.json", &first_build())
        .with_project_config("basedir = \"public\"\n")
        .build();

    let result = env.run(&["prune", "--previous", "previous.json"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(
        result.stderr.contains("unknown config key 'basedir'"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'base_dir'?"));
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::builder()
        .with_file("previous.json", &first_build())
        .build();

    let result = env.run(&[
        "--config",
        "missing.toml",
        "prune",
        "--previous",
        "previous.json",
    ]);

    assert!(!result.is_success());
    assert_output_contains!(result, "failed to load config");
}

#[test]
fn explicit_invalid_config_fails() {
    let env = TestEnv::builder()
        .with_file("previous.json", &first_build())
        .with_file("custom.toml", "manifest = [")
        .build();

    let result = env.run(&[
        "--config",
        "custom.toml",
        "prune",
        "--previous",
        "previous.json",
    ]);

    assert!(!result.is_success());
    assert_output_contains!(result, "custom.toml");
}
