// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between RPC callers and the registry service
// - Translates between DTOs and domain entities
// - Owns the JSON-lines request dispatcher

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod rpc;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use rpc::{dispatch, handle_line, RpcReply, RpcRequest};
pub use state::AppState;
