//! # happy-core
//!
//! Core types, ID prefixes, and error types for GitHappy.
//!
//! This crate provides the foundational types shared across all GitHappy crates:
//! - Entity structs for the journal (entries, tags, users)
//! - Entry type, mood, role, and gitmoji enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - Authenticated identity passed between crates
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
