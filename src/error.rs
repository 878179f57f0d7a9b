use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Flag,
    Connection,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "Config",
            ErrorKind::Flag => "Flag",
            ErrorKind::Connection => "Connection",
            ErrorKind::Internal => "Internal",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A command-line option could not be read as its expected type.
    pub fn invalid_flag(option: &str) -> Self {
        Self::new(
            ErrorKind::Flag,
            format!("Invalid value for --{} option", option),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

pub fn classify_error(err: &anyhow::Error) -> ErrorKind {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.kind;
    }
    ErrorKind::Internal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flag_names_the_option() {
        let err = AppError::invalid_flag("port");
        assert_eq!(err.kind, ErrorKind::Flag);
        assert_eq!(err.to_string(), "Invalid value for --port option");
    }

    #[test]
    fn classifies_wrapped_app_errors() {
        let err: anyhow::Error = AppError::new(ErrorKind::Config, "bad file").into();
        assert_eq!(classify_error(&err), ErrorKind::Config);

        let other = anyhow::anyhow!("boom");
        assert_eq!(classify_error(&other), ErrorKind::Internal);
    }
}
