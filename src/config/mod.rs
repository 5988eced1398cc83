//! JSON configuration for the demo tooling.

pub mod cc_demo;
