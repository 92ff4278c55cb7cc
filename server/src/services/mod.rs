//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the conversation logic so route handlers stay
//! focused on protocol translation.

pub mod chat;
