//! Non-interactive console output

pub mod console;
