use std::fmt;

/// Erros das operações de registro, favoritos e comments
///
/// NotFound e WriteFailed são distintos de propósito: "zero documentos
/// modificados" não é a mesma coisa que falha de transporte no driver.
#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    WriteFailed(String),
    Database(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_kind() {
        let err = ServiceError::WriteFailed("0 documents modified".to_string());
        assert_eq!(err.to_string(), "Write failed: 0 documents modified");

        let err = ServiceError::NotFound("user a@x.com".to_string());
        assert!(err.to_string().starts_with("Not found"));
    }
}
