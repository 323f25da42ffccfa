// Integration tests for salesdash
// This file serves as the main entry point for integration tests

mod common;

#[path = "integration/filtering.rs"]
mod filtering;

#[path = "integration/lookup.rs"]
mod lookup;

#[path = "integration/summary_output.rs"]
mod summary_output;

#[path = "integration/dashboard_render.rs"]
mod dashboard_render;

#[path = "integration/demo_data.rs"]
mod demo_data;
