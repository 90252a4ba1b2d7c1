//! View rendering: one module per view.

pub mod dashboard;
pub mod home;
pub mod lab;
pub mod specs;
