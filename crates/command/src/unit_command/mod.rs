//! Reversible unit commands.
//!
//! A [`UnitCommand`] pairs a [`CommandRecord`] (stable unit/player IDs) with a
//! [`CommandKind`]. Live entity handles are bound after construction, the
//! command is executed once, and it can be undone once afterwards.

pub mod effects;
pub mod record;
pub mod types;


pub use record::CommandRecord;
pub use types::{AppliedEffect, BindError, CommandKind, UnitCommand};
