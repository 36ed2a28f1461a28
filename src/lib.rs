pub mod activity;
pub mod creation;
pub mod error;
pub mod host;
pub mod paths;
pub mod picker;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use activity::{ActivityEvent, ActivityLog, EventType};
pub use creation::CreationOutcome;
pub use error::{EntryKind, PickerError};
pub use host::{ConfirmChoice, Filesystem, HostSurface, LocalFs};
pub use picker::{
    run_create_command, PickerEvent, PickerEvents, PickerSession, SessionOutcome,
    SuggestionKind, SuggestionRecord,
};
pub use workspace::{PickerConfig, WorkspaceContext};
