//! Recording host doubles for exercising tree providers without a real view.

mod context;
mod listener;

pub use context::RecordingUiContext;
pub use listener::RecordingTreeListener;
