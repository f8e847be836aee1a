// src/gui/components/mod.rs
pub mod filter_panel;
pub mod product_table;
pub mod toolbar;
