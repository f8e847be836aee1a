// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod specs;

pub mod data;
pub mod embed;
pub mod feed;
pub mod file;
pub mod gui;
pub mod product;
pub mod progress;
