//! Integration tests for ksmin

mod helpers;

mod cli_test;
mod pipeline_test;
