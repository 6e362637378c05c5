//! # Prism Views
//!
//! The standard view component set. Heavier views are deferred and load on
//! first instantiation; everything else registers eagerly.

use std::sync::Arc;

use view_registry::{
    ComponentFactory, ComponentRegistry, FnLoader, RegistryError, StaticComponent, ViewComponent,
};

/// Registry category holding view components
pub const VIEW_CATEGORY: &str = "View";

/// Generic fallback view, able to display any view-model
pub const ANY_VIEW: &str = "AnyView";

fn eager(name: &'static str) -> (&'static str, ComponentFactory) {
    (name, ComponentFactory::eager(StaticComponent::new(name)))
}

fn deferred(name: &'static str) -> (&'static str, ComponentFactory) {
    let factory = ComponentFactory::deferred(FnLoader::new(move || {
        Ok(Arc::new(StaticComponent::new(name)) as Arc<dyn ViewComponent>)
    }));
    (name, factory)
}

/// The standard name-to-factory table
pub fn standard_components() -> Vec<(&'static str, ComponentFactory)> {
    vec![
        eager(ANY_VIEW),
        eager("DataGridView"),
        eager("FormView"),
        eager("SectionView"),
        eager("DesignView"),
        eager("TabView"),
        eager("TreeView"),
        eager("ListView"),
        eager("LogView"),
        eager("HtmlView"),
        eager("DataImporterView"),
        deferred("MarkdownView"),
        deferred("NestedListView"),
        deferred("ChatView"),
        deferred("VideoCallView"),
        deferred("ChatbotView"),
        deferred("SplitView"),
        deferred("MarkdownEditorView"),
        deferred("ImageEditorView"),
        eager("TimelineView"),
        eager("CommentView"),
    ]
}

/// Register the standard view set into the `View` category
pub fn register_standard_views(registry: &ComponentRegistry) {
    let components = standard_components();
    tracing::debug!("Registering {} standard views", components.len());
    registry.register_components(VIEW_CATEGORY, components);
}

/// Resolve a view type, falling back to the generic view for unknown names
pub fn resolve_view_or_any(
    registry: &ComponentRegistry,
    name: &str,
) -> Result<ComponentFactory, RegistryError> {
    registry.resolve_or(VIEW_CATEGORY, name, ANY_VIEW)
}
