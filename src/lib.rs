//! Duplicate Scrabble engine (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so hosts depend on a single package:
//! `duplicate_scrabble::{types, dict, core, engine}`.

pub use duplicate_scrabble_core as core;
pub use duplicate_scrabble_dict as dict;
pub use duplicate_scrabble_engine as engine;
pub use duplicate_scrabble_types as types;
