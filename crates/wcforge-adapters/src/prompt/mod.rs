//! Prompt adapters.
//!
//! The terminal adapter sits behind the `interactive` feature so headless
//! builds can drop the dialoguer dependency entirely.

#[cfg(feature = "interactive")]
mod console;
mod scripted;

#[cfg(feature = "interactive")]
pub use console::ConsolePrompt;
pub use scripted::ScriptedPrompt;
