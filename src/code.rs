//! The closed set of failure codes raised by the haptic harpsichord firmware.
//!
//! Every module that can fail with one of these conditions reports it with an
//! [`ErrorCode`]. The discriminants are stable and may be persisted.
//!
//! # Examples
//!
//! ```rust
//! use haptic_harpsichord::{ErrorCode, Subsystem};
//!
//! let code = ErrorCode::FramNotFound;
//! assert_eq!(code, ErrorCode::FramNotFound);
//! assert_ne!(code, ErrorCode::SensorReadFail);
//! assert_eq!(code.subsystem(), Subsystem::Fram);
//! assert_eq!(code.name(), "FRAM_NOT_FOUND");
//! ```

use core::fmt;

use modular_bitfield::prelude::Specifier;

/// Failure conditions shared by the FRAM storage and sensor collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum ErrorCode {
    /// FRAM storage device was not detected or is not addressable.
    FramNotFound = 0,
    /// A write to FRAM storage did not complete.
    FramWriteFail = 1,
    /// A read from FRAM storage did not complete.
    FramReadFail = 2,
    /// Acquisition from a physical sensor did not complete.
    SensorReadFail = 3,
    /// A sensor reading was obtained but is out of range or implausible.
    SensorValueFail = 4,
}

/// Hardware area an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subsystem {
    /// Non-volatile FRAM storage.
    Fram,
    /// Physical measurement sensors.
    Sensor,
}

/// Raw value that does not name any [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidErrorCode(pub u8);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code {}", self.0)
    }
}

impl ErrorCode {
    /// Number of declared codes.
    pub const COUNT: usize = 5;

    /// Every code in declaration order.
    pub const ALL: [ErrorCode; Self::COUNT] = [
        Self::FramNotFound,
        Self::FramWriteFail,
        Self::FramReadFail,
        Self::SensorReadFail,
        Self::SensorValueFail,
    ];

    /// Returns the stable discriminant.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a code by discriminant.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::FramNotFound),
            1 => Some(Self::FramWriteFail),
            2 => Some(Self::FramReadFail),
            3 => Some(Self::SensorReadFail),
            4 => Some(Self::SensorValueFail),
            _ => None,
        }
    }

    /// Returns the constant-style name used in logs and telemetry.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FramNotFound => "FRAM_NOT_FOUND",
            Self::FramWriteFail => "FRAM_WRITE_FAIL",
            Self::FramReadFail => "FRAM_READ_FAIL",
            Self::SensorReadFail => "SENSOR_READ_FAIL",
            Self::SensorValueFail => "SENSOR_VALUE_FAIL",
        }
    }

    /// Returns a short human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::FramNotFound => "FRAM storage not detected",
            Self::FramWriteFail => "FRAM write did not complete",
            Self::FramReadFail => "FRAM read did not complete",
            Self::SensorReadFail => "sensor acquisition did not complete",
            Self::SensorValueFail => "sensor value out of range",
        }
    }

    /// Returns the subsystem that raised this code.
    pub const fn subsystem(self) -> Subsystem {
        match self {
            Self::FramNotFound | Self::FramWriteFail | Self::FramReadFail => Subsystem::Fram,
            Self::SensorReadFail | Self::SensorValueFail => Subsystem::Sensor,
        }
    }

    /// Returns `true` for FRAM storage failures.
    pub const fn is_fram(self) -> bool {
        matches!(self.subsystem(), Subsystem::Fram)
    }

    /// Returns `true` for sensor failures.
    pub const fn is_sensor(self) -> bool {
        matches!(self.subsystem(), Subsystem::Sensor)
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        code.as_u8()
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ErrorCode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}
