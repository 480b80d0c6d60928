//! Component library for the DISH portal shell and pages.

pub mod components;

pub use components::*;
