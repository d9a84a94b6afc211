fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Shown in the footer via env!
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs or the embedded showcase changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=showcase");
}
