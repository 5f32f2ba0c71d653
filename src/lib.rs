pub mod config;
pub mod physic;
pub mod reading;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
