//! # Prism View Model
//!
//! View-model data objects, dynamic property resolution, and the model
//! service used to resolve child references.

pub mod children;
pub mod model;
pub mod props;
pub mod service;

pub use children::ChildRef;
pub use model::{ViewModel, ViewModelId};
pub use props::{call_prop, PropContext, PropValue, PropertyResolvable, ViewServiceId};
pub use service::{InMemoryModelService, ModelService};
