pub mod error;
pub mod prompt;
pub mod agent;
pub mod terminal;
pub mod scripted;
pub mod registration;

pub use agent::Agent;
pub use error::InputError;
pub use prompt::Prompter;
pub use terminal::TerminalAgent;
pub use scripted::ScriptedAgent;
pub use registration::register_territories;
