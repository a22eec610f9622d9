//! Model clients behind logical slot names.
//!
//! This module handles:
//! - The [`ModelFactory`] seam over the serdesAI provider constructors
//! - The [`ModelProvider`] composite, one handle per [`crate::models::ModelSlot`]
//! - Deterministic mocks for tests and offline runs

mod composite;
mod factory;
pub mod mock;

pub use composite::ModelProvider;
pub use factory::{ModelFactory, ProviderError, SdkModelFactory};
pub use mock::{MockModel, MockModelFactory};
