//! Test suite for DevConnector
//!
//! This module organizes all integration tests. Every test builds its own
//! router over a fresh in-memory store, so tests never share state.

pub mod common;
