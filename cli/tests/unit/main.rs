//! Unit tests for reqinstall
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod helpers;
