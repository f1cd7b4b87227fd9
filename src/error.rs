//! Error wrapper pairing an [`ErrorCode`] with the collaborator's own error.

use core::fmt;

use embedded_hal::{i2c, spi};

use crate::code::{ErrorCode, Subsystem};

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// A tagged failure: which [`ErrorCode`] occurred and, optionally, the bus or
/// driver error that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error<E> {
    code: ErrorCode,
    source: Option<E>,
}

impl<E> Error<E> {
    /// Creates an error carrying only a code.
    pub const fn new(code: ErrorCode) -> Self {
        Self { code, source: None }
    }

    /// Creates an error carrying a code and the underlying error.
    pub const fn with_source(code: ErrorCode, source: E) -> Self {
        Self {
            code,
            source: Some(source),
        }
    }

    /// Returns the failure code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the subsystem of the failure code.
    pub const fn subsystem(&self) -> Subsystem {
        self.code.subsystem()
    }

    /// Returns the underlying error, if any.
    pub fn source(&self) -> Option<&E> {
        self.source.as_ref()
    }

    /// Consumes the error and returns the underlying error, if any.
    pub fn into_source(self) -> Option<E> {
        self.source
    }

    /// Converts the underlying error, keeping the code.
    pub fn map_source<F, O>(self, f: O) -> Error<F>
    where
        O: FnOnce(E) -> F,
    {
        Error {
            code: self.code,
            source: self.source.map(f),
        }
    }
}

impl<E: i2c::Error> Error<E> {
    /// Returns the I2C error kind of the underlying bus error.
    pub fn i2c_kind(&self) -> Option<i2c::ErrorKind> {
        self.source.as_ref().map(i2c::Error::kind)
    }
}

impl<E: spi::Error> Error<E> {
    /// Returns the SPI error kind of the underlying bus error.
    pub fn spi_kind(&self) -> Option<spi::ErrorKind> {
        self.source.as_ref().map(spi::Error::kind)
    }
}

impl<E> From<ErrorCode> for Error<E> {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl<E> PartialEq<ErrorCode> for Error<E> {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.code == *other
    }
}

impl<E> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            Some(_) => write!(f, "{}: bus error", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self.source {
            Some(_) => defmt::write!(f, "{}: bus error", self.code),
            None => defmt::write!(f, "{}", self.code),
        }
    }
}

/// Tags a collaborator's failure with an [`ErrorCode`].
pub trait ResultExt<T, E> {
    /// Wraps an `Err` as [`Error::with_source`] with the given code.
    fn or_code(self, code: ErrorCode) -> Result<T, E>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn or_code(self, code: ErrorCode) -> Result<T, E> {
        self.map_err(|source| {
            warn!("{} ({})", code, code.description());
            Error::with_source(code, source)
        })
    }
}
