//! Rules engine trait for take-away variants.
//!
//! Variants implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state, and how to undo them
//! - Win conditions under the configured terminal policy
//!
//! The search and the match driver call into `RulesEngine` but never
//! interpret variant-specific concepts directly.

pub mod engine;

pub use engine::{RulesEngine, SubtractionRules};
