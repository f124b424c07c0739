//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of scan file data for output.

pub mod host_view;
pub mod report_read_model;
pub mod report_read_model_builder;
pub mod scan_views;

pub use host_view::HostView;
pub use report_read_model::{ReportReadModel, TableSection};
pub use report_read_model_builder::ReportReadModelBuilder;
pub use scan_views::{FileView, PolicySummaryView, ScanSummaryView, SourceView};
