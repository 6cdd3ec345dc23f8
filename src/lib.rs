//! Taskboard: collaborative task-board backend.
//!
//! Projects own lists, lists own ordered tasks, and tasks carry assignees
//! drawn from the project's members. Every mutation appends an entry to an
//! activity trail.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of ports
//! - **Services**: Task mutations, position ordering, and activity recording
//!
//! # Modules
//!
//! - [`board`]: Task board domain, ports, adapters, and services
//! - [`config`]: TOML and environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod telemetry;
