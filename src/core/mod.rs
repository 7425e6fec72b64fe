//! Core types shared across the enhancer.

mod route;

pub use route::{RoutePath, normalize};
