//! Nutritri Library
//!
//! Core functionality for personal nutrition tracking: food references,
//! meal logging, recipes, menus and goal comparison.

pub mod lookup;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod tracker;
