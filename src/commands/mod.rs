//! Command implementations for dotwalk

pub mod run;
