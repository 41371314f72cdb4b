// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the RPC surface and services
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion
// - Commands NEVER contain business logic

pub mod livestock_commands;

pub use livestock_commands::*;
