//! Model catalog and logical slots.
//!
//! This module handles:
//! - The closed set of logical model slots
//! - The user-facing catalog of selectable models

mod catalog;
mod slot;

pub use catalog::{chat_models, chat_models_for, ModelDescriptor, DEFAULT_CHAT_MODEL};
pub use slot::ModelSlot;
