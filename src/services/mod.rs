// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod livestock_service;


pub use livestock_service::LivestockService;
