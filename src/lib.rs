//! Campus Assist - Rule-Based Student Services Assistant
//!
//! This crate implements a keyword-driven conversational assistant for
//! university student services (fees, hostels, administration, exam
//! results, and general information), with rotating canned responses
//! and host-managed conversation history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
