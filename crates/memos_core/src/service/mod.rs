//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate remote API calls into store-level state changes.
//! - Keep UI/CLI layers decoupled from API and storage details.

pub mod memo_service;
pub mod tags;
pub mod usage;
