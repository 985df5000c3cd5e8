//! Greeting formatting and name validation.
//!
//! Everything here is a pure, total function: any input (including a missing
//! name) produces a deterministic string, so there is no error type and no
//! failure path.

/// Fallback greeting used when no usable name is supplied.
pub const DEFAULT_GREETING: &str = "Hello Y'all Nerds!";

/// Static welcome banner, independent of any name.
pub const WELCOME_MESSAGE: &str = "Welcome to the Copilot Agent POC!";

/// Stateless greeting formatter.
///
/// Holds no fields, so it is free to construct anywhere and safe to share
/// across threads without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }

    /// Build the personalized greeting for `name`.
    ///
    /// A missing, empty, or whitespace-only name falls back to
    /// [`DEFAULT_GREETING`]. Otherwise the name is trimmed and substituted
    /// verbatim: no case normalization, no escaping, no length limit.
    /// Whitespace detection follows `char::is_whitespace`, so tabs and
    /// newlines count the same as spaces.
    pub fn generate_personalized_greeting(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => {
                format!("Hello {trimmed}, welcome to the Y'all Nerds club!")
            }
            _ => DEFAULT_GREETING.to_string(),
        }
    }

    /// True iff `name` is present and non-empty after trimming.
    ///
    /// This is exactly the condition under which
    /// [`generate_personalized_greeting`](Self::generate_personalized_greeting)
    /// produces a personalized message rather than the default one.
    pub fn is_valid_name(&self, name: Option<&str>) -> bool {
        name.is_some_and(|n| !n.trim().is_empty())
    }

    /// The fixed welcome message, regardless of prior calls.
    pub fn welcome_message(&self) -> &'static str {
        WELCOME_MESSAGE
    }
}
