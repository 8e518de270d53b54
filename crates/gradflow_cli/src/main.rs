//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("gradflow_core ping={}", gradflow_core::ping());
    println!("gradflow_core version={}", gradflow_core::core_version());
}
