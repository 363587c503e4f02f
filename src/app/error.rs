use crate::activity::RosterError;
use axum::body::{self};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_derive::Serialize;
use std::error::Error as StdError;
use std::fmt;

struct ErrorKindProperties {
    status: StatusCode,
    kind: &'static str,
    detail: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidCredentials,
    AdminRequired,
    ActivityNotFound,
    AlreadySignedUp,
    NotSignedUp,
    SerializationFailed,
    ResponseBuildFailed,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        let properties: ErrorKindProperties = self.into();
        properties.status
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties: ErrorKindProperties = self.to_owned().into();
        write!(f, "{}", properties.kind)
    }
}

impl From<ErrorKind> for ErrorKindProperties {
    fn from(k: ErrorKind) -> Self {
        match k {
            ErrorKind::InvalidCredentials => ErrorKindProperties {
                status: StatusCode::UNAUTHORIZED,
                kind: "invalid_credentials",
                detail: "Invalid username or password",
            },
            ErrorKind::AdminRequired => ErrorKindProperties {
                status: StatusCode::FORBIDDEN,
                kind: "admin_required",
                detail: "Teacher login required for this action",
            },
            ErrorKind::ActivityNotFound => ErrorKindProperties {
                status: StatusCode::NOT_FOUND,
                kind: "activity_not_found",
                detail: "Activity not found",
            },
            ErrorKind::AlreadySignedUp => ErrorKindProperties {
                status: StatusCode::BAD_REQUEST,
                kind: "already_signed_up",
                detail: "Student is already signed up",
            },
            ErrorKind::NotSignedUp => ErrorKindProperties {
                status: StatusCode::BAD_REQUEST,
                kind: "not_signed_up",
                detail: "Student is not signed up for this activity",
            },
            ErrorKind::SerializationFailed => ErrorKindProperties {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "serialization_failed",
                detail: "Serialization failed",
            },
            ErrorKind::ResponseBuildFailed => ErrorKindProperties {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "response_build_failed",
                detail: "Response build failed",
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorPayload {
    detail: &'static str,
}

pub struct Error {
    kind: ErrorKind,
    source: Box<dyn AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static>,
}

impl Error {
    pub fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static,
    {
        Self {
            kind,
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<RosterError> for Error {
    fn from(e: RosterError) -> Self {
        let kind = match e {
            RosterError::UnknownActivity(_) => ErrorKind::ActivityNotFound,
            RosterError::AlreadySignedUp { .. } => ErrorKind::AlreadySignedUp,
            RosterError::NotSignedUp { .. } => ErrorKind::NotSignedUp,
        };

        Self::new(kind, anyhow::Error::from(e))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let properties: ErrorKindProperties = self.kind.into();
        let payload = ErrorPayload {
            detail: properties.detail,
        };
        let body = serde_json::to_string(&payload).expect("Infallible");

        Response::builder()
            .status(properties.status.as_u16())
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body::boxed(body::Full::from(body)))
            .unwrap()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("source", &self.source.as_ref().as_ref())
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.source.as_ref().as_ref())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref().as_ref())
    }
}

pub trait ErrorExt<T> {
    fn error(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T, E: AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static> ErrorExt<T>
    for Result<T, E>
{
    fn error(self, kind: ErrorKind) -> Result<T, Error> {
        self.map_err(|source| Error::new(kind, source))
    }
}
