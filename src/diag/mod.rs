//! Diagnostic core
//!
//! Error codes, exception frames, formatting and the two fail-stop entry
//! points. Nothing in here touches hardware directly.

pub mod code;
pub mod config;
pub mod dump;
pub mod error;
pub mod fault;
pub mod frame;
pub mod notify;
pub mod registry;
pub mod sink;
