// File: crates/metrics-chart-core/build.rs
// Summary: Links the extra Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW used by the font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
