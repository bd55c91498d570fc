//! Model loading utilities.

mod loader;

pub use loader::ModelHandle;
