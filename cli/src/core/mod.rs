//! # Shrinkwrap Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the shrinkwrap application. These
//! components handle configuration and error management.
//!
//! ## Architecture
//!
//! The core infrastructure consists of two components:
//! - `config`: Environment-variable configuration loading and validation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust,ignore
//! use crate::core::config::Config; // For the validated configuration
//! use crate::core::error::{Result, ShrinkwrapError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
