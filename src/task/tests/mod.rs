//! Tests for the task domain, sanitiser, adapters, and service.

mod repository_tests;
mod support;
