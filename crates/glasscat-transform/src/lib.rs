pub mod classify;
pub mod hierarchy;
pub mod infer;
pub mod layout;
pub mod normalize;
pub mod text;
pub mod year;

pub use classify::{NoiseKind, RowRole, classify};
pub use hierarchy::HierarchyTracker;
pub use infer::{infer_position, infer_side};
pub use layout::ColumnLayout;
pub use normalize::{NormalizeWarning, materialize};
pub use text::{clean_text, clean_upper};
pub use year::{YearExpansion, expand_open_range};
