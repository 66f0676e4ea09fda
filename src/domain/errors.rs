use derive_more::{Display, From};

/// Root error type for the comparison flow
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Infrastructure Error: {}", _0)]
    Infrastructure(InfrastructureError),
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum DomainError {
    #[display(fmt = "Validation: {}", _0)]
    Validation(ValidationError),
}

/// Rejected form input. Raised at the boundary, before any request is made.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid month '{}': expected 01..12", _0)]
    InvalidMonth(String),
    #[display(fmt = "Invalid year '{}': expected a 4-digit year", _0)]
    InvalidYear(String),
    #[display(fmt = "Invalid category '{}': expected 'orders' or 'revenue'", _0)]
    InvalidCategory(String),
}

#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum InfrastructureError {
    #[display(fmt = "Network: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Rendering: {}", _0)]
    Rendering(RenderingError),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request failed: {}", _0)]
    HttpRequestFailed(String),
    #[display(fmt = "HTTP {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "malformed response: {}", _0)]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "canvas '{}' not found", _0)]
    CanvasNotFound(String),
    #[display(fmt = "2D context unavailable: {}", _0)]
    ContextUnavailable(String),
    #[display(fmt = "drawing failed: {}", _0)]
    DrawFailed(String),
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Infrastructure(InfrastructureError::Network(error))
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Infrastructure(InfrastructureError::Rendering(error))
    }
}

pub type AppResult<T> = Result<T, AppError>;
