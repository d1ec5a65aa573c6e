mod change;
mod context;
mod descriptor;
mod item;
mod provider;

pub use change::{TreeChange, TreeChangeListener};
pub use context::UiContext;
pub use descriptor::{BUILD_VIEW, ViewDescriptor};
pub use item::{Collapsible, ContextValue, TreeIcon};
pub use provider::TreeDataProvider;
