// File: crates/barchart-render-skia/build.rs
// Summary: Links the Windows system libraries skia-safe's prebuilt Skia/ICU binaries need (registry APIs).

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
