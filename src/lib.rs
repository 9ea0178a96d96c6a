//! seatmap: theater seating chart with middle-out block reservation
//!
//! Layers, innermost first:
//! - [`domain`]: seats, rows, theaters and the row selection policy (no I/O)
//! - [`application`]: reservation orchestration over a theater
//! - [`config`]: layered settings describing the theater to build
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
