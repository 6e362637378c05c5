//! # Prism View Service
//!
//! Data-view services adapt a view-model to the contract the rendering
//! layer expects. One service instance exists per rendering context.

pub mod container;
pub mod service;

pub use container::ContainerService;
pub use service::{DataViewService, ViewServiceParams};
pub use view_model::ViewServiceId;
