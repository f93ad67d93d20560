/// Visualization domain - dependency graph model, tree layout and scene building
///
/// Everything in this module is pure: no I/O, no network, no terminal access.
pub mod domain;
pub mod policies;
pub mod services;
