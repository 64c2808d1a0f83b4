use std::fmt;

/// Why a search could not be run.
///
/// A search that runs but finds nothing is not an error, it returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// `start` and `end` are the same Tile
    StartIsEnd,
    /// the approach distance was negative
    NegativeApproachDistance(i32),
    /// no [`MovementMode`](crate::MovementMode) was allowed
    NoMovementModes,
    /// the [`MoveCostProvider`](crate::MoveCostProvider) failed, the error is passed on unchanged
    Provider(E),
}

impl<E> SearchError<E> {
    /// `true` for the argument errors, `false` for [`SearchError::Provider`]
    pub fn is_precondition(&self) -> bool {
        !matches!(self, SearchError::Provider(_))
    }

    /// Converts the error of the Provider, keeping all other variants
    pub fn map_provider<F>(self, f: impl FnOnce(E) -> F) -> SearchError<F> {
        match self {
            SearchError::StartIsEnd => SearchError::StartIsEnd,
            SearchError::NegativeApproachDistance(d) => SearchError::NegativeApproachDistance(d),
            SearchError::NoMovementModes => SearchError::NoMovementModes,
            SearchError::Provider(e) => SearchError::Provider(f(e)),
        }
    }
}

impl<E: fmt::Display> fmt::Display for SearchError<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::StartIsEnd => write!(fmt, "start and end of the search are the same tile"),
            SearchError::NegativeApproachDistance(d) => {
                write!(fmt, "approach distance must not be negative, got {}", d)
            }
            SearchError::NoMovementModes => write!(fmt, "no movement mode was allowed"),
            SearchError::Provider(e) => write!(fmt, "move cost query failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Provider(e) => Some(e),
            _ => None,
        }
    }
}
