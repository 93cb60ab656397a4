//! Generated shell types live in `generated/`; this crate only hosts the build script.
