use alloc::format;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Errors returned by the fallible deep operations of an [`OrderedTree`].
///
/// Navigation failures on a single branch (trying to descend into a leaf) are
/// never reported: such a branch simply does not recurse. Only a failure of the
/// whole call surfaces here.
///
/// [`OrderedTree`]: crate::OrderedTree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The key was not present at any level reachable within the depth bound.
    #[error("key not found: {key}")]
    NotFound {
        /// `Debug` rendering of the missing key.
        key: String,
    },

    /// An argument was malformed, or the selected element set cannot produce
    /// an extremum.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn not_found<Q: ?Sized + fmt::Debug>(key: &Q) -> Self {
        Error::NotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
