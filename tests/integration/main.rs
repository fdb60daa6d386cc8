//! Router-level tests against the in-memory store

mod catalog_tests;
mod common;
mod health_tests;
