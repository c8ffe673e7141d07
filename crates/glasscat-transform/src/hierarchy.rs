use tracing::warn;

/// Carry-forward state for the brand → model hierarchy, scoped to one
/// document pass.
///
/// A brand header resets the model; a model header keeps the brand. Product
/// rows are stamped with a snapshot and never change the state.
#[derive(Debug, Default)]
pub struct HierarchyTracker {
    brand: Option<String>,
    model: Option<String>,
}

impl HierarchyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_brand(&mut self, text: String) {
        self.brand = Some(text);
        self.model = None;
    }

    /// Records a model header. A model with no current brand is an anomaly;
    /// it is still recorded and the stamped records fail validation later.
    pub fn on_model(&mut self, text: String, location: &str) {
        if self.brand.is_none() {
            warn!(%location, model = %text, "model header before any brand header");
        }
        self.model = Some(text);
    }

    /// Snapshot of the current context for stamping a product row.
    pub fn stamp(&self) -> (Option<String>, Option<String>) {
        (self.brand.clone(), self.model.clone())
    }
}
