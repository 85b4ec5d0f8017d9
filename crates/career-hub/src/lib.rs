//! Candidate search, experience bucketing and job notification fan-out shared by the student,
//! employer and admin dashboards.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
