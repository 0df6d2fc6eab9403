use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// The error type produced when a wire-level event record cannot be
/// constructed.
pub struct Error(Box<ErrorImpl>);

/// Alias for a `Result` with the error type `yaml_events::Error`.
pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
enum ErrorImpl {
    /// The emitter primitive rejected the scalar record.
    Construction,
}

pub(crate) fn construction() -> Error {
    Error(Box::new(ErrorImpl::Construction))
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorImpl::Construction => f.write_str("YAML construction failed"),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorImpl::Construction => formatter.debug_tuple("Construction").finish(),
        }
    }
}
