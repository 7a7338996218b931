// Type generation happens in build.rs; this crate has no runtime code.
