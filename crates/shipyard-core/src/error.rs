use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown change category '{label}' for entry '{description}'")]
    UnknownCategory { label: String, description: String },

    #[error("invalid --steps value(s): {}", tokens.join(", "))]
    InvalidSteps { tokens: Vec<String> },

    #[error("invalid version type '{value}': expected major, minor or patch")]
    InvalidBumpType { value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_steps_lists_every_token() {
        let err = CoreError::InvalidSteps {
            tokens: vec!["lint".to_string(), "deploy".to_string()],
        };

        assert_eq!(err.to_string(), "invalid --steps value(s): lint, deploy");
    }

    #[test]
    fn unknown_category_names_label() {
        let err = CoreError::UnknownCategory {
            label: "Refactors".to_string(),
            description: "Moved files".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("Refactors"));
        assert!(msg.contains("Moved files"));
    }
}
