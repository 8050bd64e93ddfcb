use std::process::Command;

fn git_output(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap();

    // SWEEP_VERSION: always clean, used by clap attributes and the man page.
    println!("cargo:rustc-env=SWEEP_VERSION={pkg_version}");

    // SWEEP_VERSION_DISPLAY: includes the commit hash for dev builds.
    let display_version = if std::env::var("SWEEP_BUILD_RELEASE").is_ok() {
        pkg_version
    } else {
        match git_output(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) => format!("{pkg_version} (dev {hash})"),
            None => pkg_version,
        }
    };

    println!("cargo:rustc-env=SWEEP_VERSION_DISPLAY={display_version}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SWEEP_BUILD_RELEASE");
}
