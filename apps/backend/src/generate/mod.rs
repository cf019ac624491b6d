//! Answer generation - the collaborator that turns a question plus a stored
//! suspect fact into the text recorded on a round.

pub mod scripted;
pub mod template;
pub mod trait_def;

pub use scripted::ScriptedAnswerer;
pub use template::TemplateAnswerer;
pub use trait_def::{AnswerGenerator, GenerateError};
