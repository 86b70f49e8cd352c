use chrono::Datelike;

fn main() {
    // Copyright year in the footer, fixed at build time so server and client render the same text
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
