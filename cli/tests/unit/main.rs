//! Unit tests for singularity-setup
//!
//! These tests drive the library directly, either against a recording mock
//! filesystem or a throwaway temp directory.

mod mocks;
mod property_tests;
