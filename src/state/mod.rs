// ============================================================================
// STATE MODULE - Rc<RefCell> state containers with change notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod navigation_state;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use navigation_state::*;
pub use app_state::*;
