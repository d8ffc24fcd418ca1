//! # crc-engine
//! A generic, parameterizable CRC engine. Any width from 1 to 128 bits is
//! supported by one algorithm, with native loops for 8, 16 and 32 bit
//! registers, and a catalog of named standard variants that can verify
//! itself against the check string "123456789".

//! ## Example
//! ```
//! use crc_engine::{catalog, CrcEngine, CrcParameters, CHECK_DATA};
//!
//! // A named variant, fed in two chunks.
//! let mut crc = CrcEngine::new(catalog::CRC_32).unwrap();
//! crc.process(b"1234").process(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF43926);
//!
//! // Same thing by name.
//! let mut crc = CrcEngine::by_name("CRC-64/XZ").unwrap();
//! assert_eq!(crc.process(CHECK_DATA).finalize(), 0x995DC9BBDF1939FA);
//!
//! // User defined parameters.
//! let xmodem = CrcParameters::new(16, 0x1021).name("my-xmodem").check(0x31C3);
//! assert_eq!(xmodem.checksum(CHECK_DATA).unwrap(), 0x31C3);
//!
//! // Every catalog entry reproduces its check value.
//! assert_eq!(catalog::self_test().unwrap(), catalog::all().len());
//! ```

pub mod catalog;
mod checksum;
mod crc;
pub mod reflect;

pub use crate::checksum::Checksum;
pub use crate::crc::{ByteOrder, CrcEngine, CrcParameters, Strategy, CHECK_DATA};

use crate::catalog::CheckFailure;

/// Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Width outside `1..=128`.
    #[error("invalid CRC width {0}, expected 1..=128")]
    InvalidWidth(u32),
    /// A register sized value does not fit in the width.
    #[error("{field} 0x{value:X} does not fit in {width} bits")]
    ValueOutOfRange {
        field: &'static str,
        value: u128,
        width: u32,
    },
    /// A native strategy was requested for a width it does not serve.
    #[error("strategy {strategy} cannot run a {width} bit CRC")]
    StrategyMismatch { strategy: Strategy, width: u32 },
    /// An input element is not a byte value.
    #[error("input element {index} is {value}, not a byte")]
    ByteOutOfRange { index: usize, value: i128 },
    #[error("unknown CRC variant {0:?}")]
    UnknownVariant(String),
    /// The check vector did not reproduce the expected digest.
    #[error("{name}: check value 0x{expected:X} expected, got 0x{actual:X}")]
    CheckMismatch {
        name: &'static str,
        expected: u128,
        actual: u128,
    },
    /// One or more variants failed the self-test. All failures are listed.
    #[error("self-test failed for {} variant(s): {}", .0.len(), join_failures(.0))]
    SelfTestFailed(Vec<CheckFailure>),
}

fn join_failures(failures: &[CheckFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.name)
        .collect::<Vec<_>>()
        .join(", ")
}
