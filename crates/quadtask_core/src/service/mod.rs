//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate board mutations with snapshot persistence.
//! - Keep UI shells decoupled from storage details.

pub mod board_service;
