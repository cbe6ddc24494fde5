//! bx: Bitcoin explorer commands
//!
//! Each command binds typed arguments with clap, completes them from stdin,
//! referenced files or settings, and delegates exactly one operation to the
//! `bitcoin` library.
//!
//! # Architecture
//!
//! - `domain`: text primitives and the library calls (no I/O)
//! - `application`: error context shared by everything above the domain
//! - `command`: the command contract and its metadata
//! - `commands`: one module per command plus the registry
//! - `cli`: clap definitions and dispatch
//! - `config`: layered settings

pub mod application;
pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
