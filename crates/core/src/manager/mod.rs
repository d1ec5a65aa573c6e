mod error;
mod event;
mod manager;

pub use error::{ManagerError, ManagerErrorKind};
pub use event::{ManagerEvent, ManagerEventKind, ManagerEventListener, UnknownEventName};
pub use manager::BuildManager;
