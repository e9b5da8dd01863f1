//! Core types and definitions for the STARFALL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, snapshots and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
