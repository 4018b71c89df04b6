//! Application layer for the campus facilities system
//!
//! Converts between domain entities and their transfer objects, aggregating
//! every field-level violation of an untrusted payload into a single report,
//! and defines the ports external collaborators implement. HTTP handling,
//! persistence and rendering live outside this crate.

pub mod dto;
pub mod error;
pub mod mappers;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
