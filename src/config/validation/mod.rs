//! Configuration validation
//!
//! This module provides validation logic for configuration structures and
//! catalog plans.
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Engine, pricing and logging configuration validators
//! - `plan_validators`: Plan and tier validators, tier layout checks
//! - `tests`: Test suite for all validators

mod config_validators;
mod plan_validators;
mod trait_def;

pub use plan_validators::tier_layout_issues;
pub use trait_def::Validate;
