//! Blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests, and
//! benches can write `blockdrop::{core,engine,input,term,types}`.

pub use blockdrop_core as core;
pub use blockdrop_engine as engine;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
