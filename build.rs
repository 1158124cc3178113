fn main() {
    // Stamp once per build of this script, not on every source change
    println!("cargo:rerun-if-changed=build.rs");

    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
