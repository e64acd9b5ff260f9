//! Tests for the substitution engine
//!
//! Organized by concern: raw replacement, the five-pass pipeline, and
//! post-substitution validation.

use super::*;
use crate::error::MadlibError;

// Test helper functions
mod helpers;

mod replace;
