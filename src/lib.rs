//! Cosmetic page behaviors for the marketing pages, compiled to WASM.
//!
//! This crate is intentionally a stub by default so native builds and
//! host-side tests keep working without a wasm toolchain.
//!
//! Enable the real DOM wiring with: `--features web` (and a wasm32 target).

pub mod behavior;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{init_page_behaviors, start};
