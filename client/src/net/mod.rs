//! Network layer: the single `/chat` HTTP call.

pub mod api;
