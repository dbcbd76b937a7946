//! Hours and Overtime Engine for punch-clock exports.
//!
//! This crate provides the calculation core for turning raw punch-clock
//! export records (clock-in, lunch-out, lunch-in, clock-out per employee per
//! day) into payroll figures: hours owed against a configured daily quota,
//! overtime hours, and the monetary value of that overtime.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
