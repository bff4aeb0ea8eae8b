//! Decision Log - Decision journal backend.
//!
//! This crate tracks uncertain decisions through their lifecycle
//! (draft, locked, completed) and computes aggregate insights over
//! the recorded outcomes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
