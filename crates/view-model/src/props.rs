//! Dynamic property resolution

use crate::ChildRef;

/// Identifier of the view service requesting a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewServiceId(String);

impl ViewServiceId {
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewServiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Context passed along with a property request
///
/// Identifies which view service is asking, so computed properties can
/// tailor their result to the requesting view.
#[derive(Debug, Clone)]
pub struct PropContext {
    /// Requesting view service
    pub view_service: ViewServiceId,
    /// Declared type of the requesting view service
    pub view_type: String,
}

impl PropContext {
    pub fn new(view_service: ViewServiceId, view_type: &str) -> Self {
        Self {
            view_service,
            view_type: view_type.to_string(),
        }
    }
}

/// Value of a logical view-model property
#[derive(Debug, Clone)]
pub enum PropValue {
    /// A plain stored value
    Json(serde_json::Value),
    /// A sequence of child references
    Children(Vec<ChildRef>),
}

impl PropValue {
    /// Children sequence, if that is what this value holds
    pub fn into_children(self) -> Option<Vec<ChildRef>> {
        match self {
            PropValue::Children(children) => Some(children),
            PropValue::Json(_) => None,
        }
    }
}

/// Capability for resolving logical properties by name
///
/// A property may be a plain stored value, a computed function, or something
/// the model resolves by convention. Callers depend only on this trait.
pub trait PropertyResolvable {
    /// Resolve a logical property; `None` means the model has no such property
    fn resolve_property(&self, name: &str, ctx: &PropContext) -> Option<PropValue>;
}

/// Resolve a logical property on any property-resolvable model
pub fn call_prop<M: PropertyResolvable + ?Sized>(
    model: &M,
    name: &str,
    ctx: &PropContext,
) -> Option<PropValue> {
    model.resolve_property(name, ctx)
}
