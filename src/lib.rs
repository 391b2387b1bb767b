//! productpilot: financial viability modeling for product opportunities
//!
//! This library provides the core components for:
//! - Production cost estimation with category and complexity profiles
//! - Gross margin, TAM and multi-year revenue projection
//! - ROI, NPV and break-even analysis
//! - Sensitivity scenarios and adoption S-curves
//! - Opportunity validation, confidence scoring and sources
//! - Viability reports for CLI and JSON output

pub mod cli;
pub mod config;
pub mod finance;
pub mod opportunity;
pub mod report;
pub mod telemetry;
