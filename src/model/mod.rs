//! Model records and wire vocabularies, one module per service area.
//!
//! Every type here follows the same template (see `macros`): optional fields
//! behind accessors, consuming `with_` builders, wire-named serde mapping,
//! structural equality and a present-fields-only debug rendering. Nothing
//! validates server-side constraints; records carry whatever they are given
//! until the transport marshals them.

pub mod association;
pub mod automation;
pub mod commands;
pub mod common;
pub mod inventory;
pub mod maintenance;
pub mod parameters;
pub mod patch;
