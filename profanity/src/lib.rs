// profanity/src/lib.rs
//! # profanity CLI
//!
//! The terminal front end for `profanity-core`: filters files or stdin, answers JSON
//! requests line by line, and lists the available strategies, targets and word lists.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
