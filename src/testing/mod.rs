mod memory_environment;
mod mock_library_manager;
mod recording_actions;

pub use memory_environment::MemoryEnvironment;
pub use mock_library_manager::MockLibraryManager;
#[allow(unused_imports)]
pub use recording_actions::{RecordedWrite, RecordingActions};
