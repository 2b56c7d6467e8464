//! UniFFI bindings crate for the touch library
//!
//! This crate wraps the touch crate for UniFFI library mode binding generation.
//! It re-exports the FFI module and UniFFI scaffolding from the touch crate.
//!
//! ## Building for Android
//!
//! 1. Build the library for the device ABI:
//!    ```bash
//!    cargo build --release -p touch-ffi --target aarch64-linux-android
//!    ```
//!
//! 2. Generate Kotlin bindings:
//!    ```bash
//!    cargo run -p touch-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-linux-android/release/libtouch_ffi.so \
//!        --language kotlin \
//!        --out-dir generated/kotlin
//!    ```

// Re-export everything from the touch crate's FFI module
pub use touch::ffi::*;

// Library mode needs the scaffolding symbols in this cdylib
touch::uniffi_reexport_scaffolding!();
