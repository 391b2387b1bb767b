//! Integration tests for productpilot

mod calculator_test;
mod e2e_test;
mod report_test;
