#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, strum::EnumIter)]
pub enum ErrorKind {
    /// The ledger did not report finality within the wait budget
    FinalizationTimeout(String),
    /// Status polling reported finality but the record fetch came back empty
    TransactionNotFound(String),
    AccountNotFound(String),
    UnsupportedMessageEncoding(String),
    RPCError(String),
    InvalidInput(String),
    InternalError(String),
}

/// Every failure of the cost routine surfaces as this value.
/// `kind` is the inspectable part; `code` and `retriable` are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Error {
    pub kind: ErrorKind,

    /// Code is an HTTP-like classification of the failure.
    pub code: u32,

    pub message: String,

    /// An error is retriable if the same call may succeed if made again.
    pub retriable: bool,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let retriable = if self.retriable { " (retriable)" } else { "" };
        write!(f, "Error #{}{}: {}", self.code, retriable, self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn from_error_kind(err: ErrorKind) -> Self {
        let (code, message, retriable) = match &err {
            ErrorKind::FinalizationTimeout(message) => (
                504,
                format!("Transaction finalization check timeout: {}", message),
                true,
            ),
            ErrorKind::TransactionNotFound(message) => (
                404,
                format!("Transaction not found or not confirmed: {}", message),
                false,
            ),
            ErrorKind::AccountNotFound(message) => (
                400,
                format!("Account not found in transaction: {}", message),
                false,
            ),
            ErrorKind::UnsupportedMessageEncoding(message) => (
                422,
                format!("No account keys found in transaction message: {}", message),
                false,
            ),
            ErrorKind::RPCError(message) => (502, format!("RPC error: {}", message), true),
            ErrorKind::InvalidInput(message) => {
                (400, format!("Invalid Input: {}", message), false)
            }
            ErrorKind::InternalError(message) => {
                (500, format!("Internal Error: {}", message), false)
            }
        };
        Self {
            kind: err,
            code,
            message,
            retriable,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::FinalizationTimeout(_))
    }
}

impl<T> From<T> for Error
where
    T: Into<ErrorKind>,
{
    fn from(err: T) -> Self {
        Self::from_error_kind(err.into())
    }
}

impl From<reqwest::Error> for ErrorKind {
    fn from(error: reqwest::Error) -> Self {
        Self::RPCError(format!("{:#?}", error))
    }
}

impl From<serde_json::Error> for ErrorKind {
    fn from(error: serde_json::Error) -> Self {
        Self::InternalError(format!("Serialization failure: {:#?}", error))
    }
}
