use chrono::Datelike;

fn main() {
    // Stamp the build year for the footer copyright
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
