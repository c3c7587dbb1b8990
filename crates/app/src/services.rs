//! Application services — the use-case layer.

pub mod browser_service;
pub mod orchestration_service;
