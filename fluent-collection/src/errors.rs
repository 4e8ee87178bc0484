use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for collection operations.
///
/// Every failure surfaced by a [`Collection`](crate::collection::Collection) operation
/// carries one of these kinds so that callers can tell a missing field apart from a
/// bad aggregation or an invalid argument.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::errors::{CollectionError, CollectionResult, ErrorKind};
///
/// fn example() -> CollectionResult<()> {
///     Err(CollectionError::new("chunk size must be positive", ErrorKind::InvalidArgument))
/// }
///
/// assert_eq!(example().unwrap_err().kind(), &ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A field was requested on a record-like item that does not have it,
    /// and no default value was supplied.
    AccessError,
    /// A value has the wrong type for the operation, e.g. summing a string.
    InvalidDataType,
    /// Averaging an empty collection.
    DivisionByZero,
    /// An argument is outside the accepted domain, e.g. a zero chunk size.
    InvalidArgument,
    /// A filter could not be built or evaluated, e.g. an invalid regex.
    FilterError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::AccessError => write!(f, "Access error"),
            ErrorKind::InvalidDataType => write!(f, "Invalid data type"),
            ErrorKind::DivisionByZero => write!(f, "Division by zero"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type of the crate.
///
/// `CollectionError` holds a message, an [`ErrorKind`], an optional cause and the
/// backtrace captured where the error was created.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::errors::{CollectionError, ErrorKind};
///
/// let cause = CollectionError::new("field 'cost' is not numeric", ErrorKind::InvalidDataType);
/// let err = CollectionError::new_with_cause("sum failed", ErrorKind::InvalidDataType, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct CollectionError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<CollectionError>>,
    backtrace: Atomic<Backtrace>,
}

impl CollectionError {
    /// Creates a new `CollectionError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        CollectionError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `CollectionError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: CollectionError) -> Self {
        CollectionError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&CollectionError> {
        self.cause.as_deref()
    }
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // message with stack trace, or the cause chain
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

impl From<std::num::ParseIntError> for CollectionError {
    fn from(err: std::num::ParseIntError) -> Self {
        CollectionError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::InvalidDataType,
        )
    }
}

impl From<std::num::ParseFloatError> for CollectionError {
    fn from(err: std::num::ParseFloatError) -> Self {
        CollectionError::new(
            &format!("Float parsing error: {}", err),
            ErrorKind::InvalidDataType,
        )
    }
}

impl From<regex::Error> for CollectionError {
    fn from(err: regex::Error) -> Self {
        CollectionError::new(
            &format!("Invalid regex pattern: {}", err),
            ErrorKind::FilterError,
        )
    }
}
