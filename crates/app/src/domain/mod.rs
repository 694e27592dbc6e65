//! Widget Domain Concerns

pub mod widgets;
