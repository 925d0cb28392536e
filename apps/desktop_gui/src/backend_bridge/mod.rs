//! Backend worker: command queue intake and the summarizer client it drives.

pub mod commands;
pub mod runtime;
