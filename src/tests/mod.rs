//! Test modules for Lexitrie.
//!
//! This module contains the crate-level tests that do not belong to a
//! single source file:
//! - Property-based tests of the trie using proptest
//! - Configuration loading and validation tests
//! - Error formatting tests
//! - Shared strategies and fixtures

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
