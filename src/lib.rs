//! Diagnosis Engine - Survey scoring and cohort analytics
//!
//! This crate turns Likert survey responses into points on a two-axis trait
//! plane, classifies them against authored result templates, and summarizes
//! filtered cohorts. It also lays out result templates on fixed slot grids
//! for authoring tools.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
