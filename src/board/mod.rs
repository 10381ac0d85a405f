//! Single-board Kanban state management.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, the reducer and drag reconciliation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The state store and orchestration in [`services`]
//! - The shared handle slot in [`context`]

pub mod adapters;
pub mod context;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
