//! Version string reported by `--version` and the startup log line.

/// Returns `pkg_version (git_sha)`, or `pkg_version (unknown)` outside a git checkout.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_sha})")
}
