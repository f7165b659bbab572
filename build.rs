fn main() {
    // Writes `built.rs` (package version, git hash) into OUT_DIR.
    if let Err(err) = built::write_built_file() {
        panic!("failed to acquire build-time information: {err}");
    }
}
