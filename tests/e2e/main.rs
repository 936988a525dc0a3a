//! End-to-end tests: drive the real application against a test terminal.

mod common;
mod persistence;
mod projects_form;
