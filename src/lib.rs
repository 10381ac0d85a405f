//! Kanban: single-board task management state engine.
//!
//! A board holds ordered columns and columns hold ordered tasks. This crate
//! provides the immutable snapshot model, the pure transition engine that is
//! the only place snapshots change, the reconciliation of drag-and-drop
//! gestures into move transitions, and the service that applies transitions
//! in order and persists each resulting snapshot.
//!
//! # Architecture
//!
//! - **Domain**: pure data and logic with no infrastructure dependencies
//! - **Ports**: abstract trait interfaces for persistence and id generation
//! - **Adapters**: concrete implementations of ports (memory, files, UUIDs)
//! - **Services**: the state store and the board service
//!
//! # Modules
//!
//! - [`board`]: entities, reducer, drag reconciliation and orchestration
//! - [`config`]: runtime configuration
//! - [`telemetry`]: logging bootstrap

pub mod board;
pub mod config;
pub mod telemetry;
