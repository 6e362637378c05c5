//! Child references

use std::sync::Arc;

use crate::model::{ViewModel, ViewModelId};
use crate::service::ModelService;

/// A child entry of a container view-model
///
/// Children are stored either inline or as an identifier that the model
/// service resolves to a live view-model.
#[derive(Debug, Clone)]
pub enum ChildRef {
    /// Child view-model stored inline
    Inline(Arc<ViewModel>),
    /// Indirect reference, resolved through the model service
    Reference(ViewModelId),
}

impl ChildRef {
    /// Resolve this entry to a live view-model
    ///
    /// Inline entries pass through unchanged; references are looked up in the
    /// model service, whose answer is surfaced as-is (unknown ids stay `None`).
    pub fn resolve(&self, models: &dyn ModelService) -> Option<Arc<ViewModel>> {
        match self {
            ChildRef::Inline(model) => Some(Arc::clone(model)),
            ChildRef::Reference(id) => models.get_view(id),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, ChildRef::Reference(_))
    }
}

impl From<Arc<ViewModel>> for ChildRef {
    fn from(model: Arc<ViewModel>) -> Self {
        ChildRef::Inline(model)
    }
}

impl From<&str> for ChildRef {
    fn from(id: &str) -> Self {
        ChildRef::Reference(ViewModelId::from(id))
    }
}
