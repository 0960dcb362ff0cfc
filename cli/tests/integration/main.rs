//! Integration tests for lab CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Every test points `LAB_CONFIG` and `LAB_ACCOUNT` at temp files so nothing
//! under `~/.lab` is read or written.

mod config_command;
mod helpers;
