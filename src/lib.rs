// src/lib.rs
// ============================================================================
// Module: Dish API System Tests Library
// Description: Shared configuration for Dish API system-test scenarios.
// Purpose: Provide common utilities for the black-box test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration utilities used by the Dish API
//! system-test binaries in `tests/`. The suite is a black-box client of a
//! running Dish API server; no server code lives here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
