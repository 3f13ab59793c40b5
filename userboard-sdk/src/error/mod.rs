use thiserror::Error;

pub type Reason = String;

/// Every variant is a request failure from the interface's point of view;
/// the split only keeps the log lines readable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// could not reach the server or build the request
    #[error("request failed: {0}")]
    Network(Reason),
    /// server answered with a non-2xx status
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: Reason },
    /// response body does not match the expected shape
    #[error("invalid response payload: {0}")]
    Convert(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Error::Convert(err.to_string()),
            err => Error::Network(err.to_string()),
        }
    }
}
