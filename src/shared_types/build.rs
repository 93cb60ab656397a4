use account_ui_core::{
    events::{AuthEvent, FormEvent},
    App, ToastOperation,
};
use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Nested enums are not always traced with all variants from the app alone
    gen.register_type::<AuthEvent>()?;
    gen.register_type::<FormEvent>()?;
    gen.register_type::<ToastOperation>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
