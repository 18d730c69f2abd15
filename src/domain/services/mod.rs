//! Domain Services
//!
//! Business logic that operates on domain entities. File access goes
//! through the ports, so every service runs against a temp dir in tests.

mod classifier;
mod dependency_resolver;
mod planner;
mod staleness;

pub use classifier::PathClassifier;
pub use dependency_resolver::DependencyResolver;
pub use planner::{PlannedAction, PlannedEntry, Planner, RenderPlan};
pub use staleness::StalenessTracker;
