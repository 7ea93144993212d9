//! Integration tests for the `ssg` binary

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use ssg_testkit::SiteFixture;
use std::fs;
use std::process::Command;

/// `ssg` running inside the fixture root, colors disabled
fn ssg(site: &SiteFixture) -> Command {
    let mut cmd = Command::new(cargo_bin!("ssg"));
    cmd.current_dir(site.root()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help_flag() {
    Command::new(cargo_bin!("ssg"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--watch"));
}

#[test]
fn test_cli_version_flag() {
    Command::new(cargo_bin!("ssg"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ssg"));
}

#[test]
fn test_default_run_generates_site() {
    let site = SiteFixture::new();
    site.file("index.html", "<!-- template: header.html -->\n<p>home</p>\n")
        .file("header.html", "<h1>Hi</h1>\n")
        .file("css/site.css", "body {}\n");

    ssg(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processed: ./src/index.html -> ./generated/index.html",
        ))
        .stdout(predicate::str::contains(
            "Processed: ./src/css/site.css -> ./generated/css/site.css",
        ))
        .stdout(predicate::str::contains("Static site generation complete."));

    assert_eq!(site.read_output("index.html"), "<h1>Hi</h1>\n<p>home</p>\n");
    assert_eq!(site.read_output("css/site.css"), "body {}\n");
}

#[test]
fn test_errors_are_listed_and_exit_nonzero() {
    let site = SiteFixture::new();
    site.file("a.html", "<!-- template: missing.html -->\n");

    ssg(&site)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Static site generation completed with errors:",
        ))
        .stdout(predicate::str::contains(
            "- Warning: Template missing.html not found for ./src/a.html:1",
        ))
        .stdout(predicate::str::contains("Generation failed due to errors."))
        .stdout(predicate::str::contains("Fix the errors and run again."));

    assert_eq!(site.read_output("a.html"), "<!-- template: missing.html -->\n");
}

#[test]
fn test_missing_source_directory() {
    let site = SiteFixture::new();
    fs::remove_dir(site.source()).unwrap();

    ssg(&site)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error opening directory: ./src"));

    assert!(!site.output().exists());
}

#[test]
fn test_source_and_output_flags() {
    let site = SiteFixture::new();
    let content = site.root().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("page.html"), "<p>flag</p>\n").unwrap();

    ssg(&site)
        .args(["--source", "content", "--output", "public"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(site.root().join("public/page.html")).unwrap(),
        "<p>flag</p>\n"
    );
    assert!(!site.output().exists());
}

#[test]
fn test_config_file_is_picked_up() {
    let site = SiteFixture::new();
    site.file("robots.txt", "User-agent: *\n");
    fs::write(
        site.root().join("ssg.toml"),
        "[site]\noutput = \"dist\"\n",
    )
    .unwrap();

    ssg(&site).assert().success();

    assert_eq!(
        fs::read_to_string(site.root().join("dist/robots.txt")).unwrap(),
        "User-agent: *\n"
    );
}

#[test]
fn test_error_cap_from_config() {
    let site = SiteFixture::new();
    site.file(
        "a.html",
        "<!-- template: one.html -->\n<!-- template: two.html -->\n",
    );
    fs::write(site.root().join("ssg.toml"), "[limits]\nmax_errors = 1\n").unwrap();

    ssg(&site)
        .assert()
        .failure()
        .stdout(predicate::str::contains("one.html"))
        .stdout(predicate::str::contains("two.html").not())
        .stdout(predicate::str::contains("1 more error(s) not shown"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let site = SiteFixture::new();
    site.file("index.html", "<p></p>\n");
    fs::write(site.root().join("ssg.toml"), "[site\n").unwrap();

    ssg(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("ssg.toml"));

    assert!(!site.output().exists());
}

#[test]
fn test_explicit_missing_config_is_fatal() {
    let site = SiteFixture::new();

    ssg(&site)
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_output_inside_source_is_rejected() {
    let site = SiteFixture::new();
    site.file("index.html", "<p></p>\n");

    ssg(&site)
        .args(["--output", "src/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID_VALUE"));

    assert!(!site.source().join("out").exists());
}

#[test]
fn test_second_run_overwrites_in_place() {
    let site = SiteFixture::new();
    site.file("index.html", "<p>v1</p>\n");
    ssg(&site).assert().success();

    site.file("index.html", "<p>v2</p>\n");
    ssg(&site).assert().success();

    assert_eq!(site.read_output("index.html"), "<p>v2</p>\n");
}
