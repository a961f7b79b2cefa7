// SquadPlay Core Library
// Exports all modules for host applications and tests

pub mod models;
pub mod services;
pub mod state;
pub mod utils;
