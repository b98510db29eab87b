//! KeyRelay Library
//!
//! Core modules for the KeyRelay text injection tool.

pub mod config;
pub mod error;
pub mod injection;
