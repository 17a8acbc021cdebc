//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "betsim 2026-10-19 (abc1234)"
pub fn version_string(binary: &str) -> String {
    format!("{} {} ({})", binary, BUILD_DATE, BUILD_COMMIT)
}
