//! Route-level page components.

pub mod workflow;
