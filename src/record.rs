//! Packed one-byte fault records for telemetry frames and the FRAM fault log.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::code::{ErrorCode, InvalidErrorCode};

/// Largest value the `repeats` field can hold.
pub const MAX_REPEATS: u8 = 0x1F;

const CODE_MASK: u8 = 0b0000_0111;

/// Bitfield representation of a fault: code in bits 0..=2, repeat count in
/// bits 3..=7.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultRecord {
    // Failure code (bits 0..=2).
    pub code: ErrorCode,
    // Saturating repeat counter (bits 3..=7).
    pub repeats: B5,
}

impl FaultRecord {
    /// Creates a record for a first occurrence of `code`.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new().with_code(code).with_repeats(0)
    }

    /// Decodes a raw byte, rejecting code bits that name no [`ErrorCode`].
    pub fn decode(raw: u8) -> core::result::Result<Self, InvalidErrorCode> {
        let record = Self::from_bytes([raw]);
        match record.code_or_err() {
            Ok(_) => Ok(record),
            Err(_) => Err(InvalidErrorCode(raw & CODE_MASK)),
        }
    }

    /// Returns the failure code.
    pub fn error_code(&self) -> ErrorCode {
        self.code()
    }

    /// Counts another occurrence, saturating at [`MAX_REPEATS`].
    pub fn bump(&mut self) {
        let repeats = self.repeats();
        if repeats < MAX_REPEATS {
            self.set_repeats(repeats + 1);
        }
    }
}

impl From<ErrorCode> for FaultRecord {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl From<FaultRecord> for u8 {
    fn from(value: FaultRecord) -> Self {
        value.into_bytes()[0]
    }
}

impl TryFrom<u8> for FaultRecord {
    type Error = InvalidErrorCode;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        Self::decode(value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaultRecord {
    fn format(&self, f: defmt::Formatter) {
        match self.code_or_err() {
            Ok(code) => defmt::write!(f, "{} x{=u8}", code, self.repeats()),
            Err(_) => defmt::write!(f, "<invalid> x{=u8}", self.repeats()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FaultRecord, MAX_REPEATS};
    use crate::code::{ErrorCode, InvalidErrorCode};

    #[test]
    fn code_occupies_low_bits() {
        for code in ErrorCode::ALL {
            let record = FaultRecord::from_code(code);
            assert_eq!(u8::from(record), code.as_u8());
            assert_eq!(record.error_code(), code);
        }
    }

    #[test]
    fn repeats_occupy_high_bits() {
        let mut record = FaultRecord::from(ErrorCode::SensorValueFail);
        record.bump();
        record.bump();
        assert_eq!(record.repeats(), 2);
        assert_eq!(u8::from(record), (2 << 3) | 0x04);
    }

    #[test]
    fn bump_saturates() {
        let mut record = FaultRecord::from_code(ErrorCode::FramReadFail);
        for _ in 0..100 {
            record.bump();
        }
        assert_eq!(record.repeats(), MAX_REPEATS);
        assert_eq!(record.error_code(), ErrorCode::FramReadFail);
    }

    #[test]
    fn decode_accepts_stored_bytes() {
        let stored = 0b1010_1011;
        let record = FaultRecord::decode(stored).unwrap();
        assert_eq!(record.error_code(), ErrorCode::SensorReadFail);
        assert_eq!(record.repeats(), 0b10101);
        assert_eq!(u8::from(record), stored);
    }

    #[test]
    fn decode_rejects_unknown_codes() {
        assert_eq!(FaultRecord::decode(0x05), Err(InvalidErrorCode(5)));
        assert_eq!(FaultRecord::try_from(0xFE), Err(InvalidErrorCode(6)));
        assert_eq!(FaultRecord::decode(0x0F), Err(InvalidErrorCode(7)));
    }
}
