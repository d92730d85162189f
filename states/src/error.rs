use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("state not found: {name}, context: {context}")]
    StateNotFound {
        name: &'static str,
        context: String,
    },
}

impl Error {
    pub fn state_not_found(name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            name,
            context: context.into(),
        }
    }
}
