//! Integration tests for dstatic

mod cli_test;
mod helpers;
mod loop_test;
mod settings_test;
