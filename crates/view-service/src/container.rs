//! Container data-view service

use std::sync::Arc;

use view_model::{call_prop, PropContext, ViewModel, ViewServiceId};

use crate::service::{DataViewService, ViewServiceParams};

/// Adapter for container-like view-models
///
/// Exposes a normalized, resolved child list regardless of whether each
/// child was stored inline or by reference. Resolution is read-through:
/// every access re-resolves from the model's current `children` value and
/// never mutates the model.
pub struct ContainerService {
    params: ViewServiceParams,
    /// Previously computed children, handed in by the base layer for reuse;
    /// stored untouched, never read during resolution
    children_ref: Option<Vec<Option<Arc<ViewModel>>>>,
}

impl ContainerService {
    pub const VIEW_TYPE: &'static str = "ContainerView";

    pub fn new(
        params: ViewServiceParams,
        children_ref: Option<Vec<Option<Arc<ViewModel>>>>,
    ) -> Self {
        Self {
            params,
            children_ref,
        }
    }

    /// Externally supplied prior children, exactly as passed at construction
    pub fn children_ref(&self) -> Option<&[Option<Arc<ViewModel>>]> {
        self.children_ref.as_deref()
    }

    /// Resolved children of the bound view-model
    ///
    /// `None` when the model has no `children` property (or a value that is
    /// not a child sequence). Otherwise one entry per stored child, in order:
    /// inline children pass through with identity preserved, references carry
    /// whatever the model service returned for them.
    pub fn children(&self) -> Option<Vec<Option<Arc<ViewModel>>>> {
        let ctx = PropContext::new(self.params.id.clone(), Self::VIEW_TYPE);
        let children = call_prop(self.params.model.as_ref(), "children", &ctx)?
            .into_children()?;

        Some(
            children
                .iter()
                .map(|child| child.resolve(self.params.models.as_ref()))
                .collect(),
        )
    }
}

impl DataViewService for ContainerService {
    fn view_type(&self) -> &str {
        Self::VIEW_TYPE
    }

    fn id(&self) -> &ViewServiceId {
        &self.params.id
    }

    fn model(&self) -> &Arc<ViewModel> {
        &self.params.model
    }
}
