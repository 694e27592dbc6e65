//! Widgets

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::WidgetsServiceError;
pub use service::*;
