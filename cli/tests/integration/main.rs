//! Integration tests for singularity-setup
//!
//! These tests spawn the actual binary and test end-to-end behavior, with
//! roots redirected into a temp directory through a YAML config file.
