//! Platform abstraction layer
//!
//! Key-value storage behind one trait:
//! - `LocalStorage` on web (wasm32)
//! - `FileStorage` on native, one JSON file per key
//! - `MemoryStorage` everywhere, for tests and storage-less browsers

pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

pub use storage::{MemoryStorage, Storage, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
