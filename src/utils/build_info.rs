//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "sky-hopper <date> (<commit>)" for `--version`.
pub fn version_line() -> String {
    format!("sky-hopper {} ({})", BUILD_DATE, BUILD_COMMIT)
}
