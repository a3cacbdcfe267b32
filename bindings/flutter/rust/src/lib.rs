//! Devsnap Flutter bindings - thin FFI transport over devsnap-core.
//!
//! This crate carries no decision logic: it wraps the core snapshot types in
//! FFI-friendly mirrors and routes the three named operations to the
//! service. The bridge's error path is reserved for bridge faults; the core
//! itself always produces a result.

pub mod api;
