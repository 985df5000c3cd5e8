pub mod greeting;
pub mod logging;

// Re-export the service and its message constants for convenient use in tests
// and downstream callers.
pub use greeting::{GreetingService, DEFAULT_GREETING, WELCOME_MESSAGE};
