//! DTOs for questions_sea adapter.

/// DTO for registering one question in the catalogue.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub text: String,
    pub topic: String,
    pub level: i16,
}
