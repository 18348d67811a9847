//! Shared library for the Seldon deploy Lambda functions.
//!
//! This crate provides configuration loading, error types and request models
//! used across the deploy functions.

pub mod config;
pub mod deploy;
pub mod env;
pub mod error;
pub mod models;

pub use config::Config;
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use models::{DeployRequest, DeployResponse, DeploymentTarget, ModelServer, SeldonDetail};
