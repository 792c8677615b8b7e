//! Error types for the netgen core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by [`crate::Network`] queries and generation.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A node index was outside `[0, size)`.
    #[error("node {index} does not exist (network has {size} node(s))")]
    OutOfRange {
        /// The offending node index.
        index: usize,
        /// Node count at the time of the access.
        size: usize,
    },
    /// The requested mean degree cannot parameterise a Poisson draw.
    #[error("mean degree must be finite and non-negative (got {got})")]
    InvalidMeanDegree {
        /// The rejected mean degree.
        got: f64,
    },
    /// Generation parameters were rejected.
    #[error("invalid network parameter: {reason}")]
    InvalidParameters {
        /// Human-readable explanation.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A node index was outside `[0, size)`.
        OutOfRange => OutOfRange { .. } => "NETWORK_OUT_OF_RANGE",
        /// The requested mean degree cannot parameterise a Poisson draw.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
        /// Generation parameters were rejected.
        InvalidParameters => InvalidParameters { .. } => "NETWORK_INVALID_PARAMETERS",
    }
}

impl NetworkError {
    /// Returns the offending node index for [`NetworkError::OutOfRange`].
    #[must_use]
    pub const fn node_index(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
