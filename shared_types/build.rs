use anyhow::Result;
use crux_core::typegen::TypeGen;
use net_range_core::{
    types::{SubmissionFailure, SubmissionState},
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../src");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register the state enums to ensure all variants are traced
    gen.register_type::<SubmissionState>()?;
    gen.register_type::<SubmissionFailure>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
