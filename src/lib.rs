//! Cost Segregation Question Flow
//!
//! Conversational intake for cost segregation studies: builds a category
//! specific question catalog, walks it one answer at a time with conditional
//! skipping, and turns the collected answers into a depreciation allocation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
