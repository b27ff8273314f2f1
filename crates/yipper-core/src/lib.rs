//! # Yipper Core
//!
//! The domain layer of Yipper.
//! This crate holds the yip entity, the error taxonomy and the repository port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
