//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string shown by `--version` and the start screen.
pub fn version_line() -> String {
    format!("tierforge {} ({})", BUILD_DATE, BUILD_COMMIT)
}
