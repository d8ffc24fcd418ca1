//! Named standard CRC parameter sets and the conformance self-test.
//!
//! Every entry carries its digest of [`CHECK_DATA`](crate::CHECK_DATA);
//! [`self_test`] runs all of them and reports every mismatch together.

use crate::crc::{CrcEngine, CrcParameters};
use crate::Error;
use log::{debug, warn};
use std::fmt;

macro_rules! variant {
    ($name:expr, $width:expr, $poly:expr, $init:expr, $refin:expr, $refout:expr, $xorout:expr, $check:expr) => {
        CrcParameters {
            name: $name,
            width: $width,
            polynomial: $poly,
            init_value: $init,
            reflect_input: $refin,
            reflect_output: $refout,
            xor_output: $xorout,
            check_result: $check,
        }
    };
}

pub const CRC_3_ROHC: CrcParameters = variant!("CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0x0, 0x6);
pub const CRC_4_ITU: CrcParameters = variant!("CRC-4/ITU", 4, 0x3, 0x0, true, true, 0x0, 0x7);
pub const CRC_5_EPC: CrcParameters = variant!("CRC-5/EPC", 5, 0x09, 0x09, false, false, 0x00, 0x00);
pub const CRC_5_ITU: CrcParameters = variant!("CRC-5/ITU", 5, 0x15, 0x00, true, true, 0x00, 0x07);
pub const CRC_5_USB: CrcParameters = variant!("CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19);
pub const CRC_6_CDMA2000_A: CrcParameters = variant!("CRC-6/CDMA2000-A", 6, 0x27, 0x3F, false, false, 0x00, 0x0D);
pub const CRC_6_CDMA2000_B: CrcParameters = variant!("CRC-6/CDMA2000-B", 6, 0x07, 0x3F, false, false, 0x00, 0x3B);
pub const CRC_6_DARC: CrcParameters = variant!("CRC-6/DARC", 6, 0x19, 0x00, true, true, 0x00, 0x26);
pub const CRC_6_ITU: CrcParameters = variant!("CRC-6/ITU", 6, 0x03, 0x00, true, true, 0x00, 0x06);
pub const CRC_7: CrcParameters = variant!("CRC-7", 7, 0x09, 0x00, false, false, 0x00, 0x75);
pub const CRC_7_ROHC: CrcParameters = variant!("CRC-7/ROHC", 7, 0x4F, 0x7F, true, true, 0x00, 0x53);
/// Plain CRC-8 (SMBus).
pub const CRC_8: CrcParameters = variant!("CRC-8", 8, 0x07, 0x00, false, false, 0x00, 0xF4);
pub const CRC_8_CDMA2000: CrcParameters = variant!("CRC-8/CDMA2000", 8, 0x9B, 0xFF, false, false, 0x00, 0xDA);
pub const CRC_8_DARC: CrcParameters = variant!("CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15);
pub const CRC_8_DVB_S2: CrcParameters = variant!("CRC-8/DVB-S2", 8, 0xD5, 0x00, false, false, 0x00, 0xBC);
pub const CRC_8_EBU: CrcParameters = variant!("CRC-8/EBU", 8, 0x1D, 0xFF, true, true, 0x00, 0x97);
pub const CRC_8_I_CODE: CrcParameters = variant!("CRC-8/I-CODE", 8, 0x1D, 0xFD, false, false, 0x00, 0x7E);
pub const CRC_8_ITU: CrcParameters = variant!("CRC-8/ITU", 8, 0x07, 0x00, false, false, 0x55, 0xA1);
pub const CRC_8_MAXIM: CrcParameters = variant!("CRC-8/MAXIM", 8, 0x31, 0x00, true, true, 0x00, 0xA1);
pub const CRC_8_ROHC: CrcParameters = variant!("CRC-8/ROHC", 8, 0x07, 0xFF, true, true, 0x00, 0xD0);
pub const CRC_8_WCDMA: CrcParameters = variant!("CRC-8/WCDMA", 8, 0x9B, 0x00, true, true, 0x00, 0x25);
pub const CRC_10: CrcParameters = variant!("CRC-10", 10, 0x233, 0x000, false, false, 0x000, 0x199);
pub const CRC_10_CDMA2000: CrcParameters = variant!("CRC-10/CDMA2000", 10, 0x3D9, 0x3FF, false, false, 0x000, 0x233);
pub const CRC_11: CrcParameters = variant!("CRC-11", 11, 0x385, 0x01A, false, false, 0x000, 0x5A3);
pub const CRC_12_3GPP: CrcParameters = variant!("CRC-12/3GPP", 12, 0x80F, 0x000, false, true, 0x000, 0xDAF);
pub const CRC_12_CDMA2000: CrcParameters = variant!("CRC-12/CDMA2000", 12, 0xF13, 0xFFF, false, false, 0x000, 0xD4D);
pub const CRC_12_DECT: CrcParameters = variant!("CRC-12/DECT", 12, 0x80F, 0x000, false, false, 0x000, 0xF5B);
pub const CRC_13_BBC: CrcParameters = variant!("CRC-13/BBC", 13, 0x1CF5, 0x0000, false, false, 0x0000, 0x04FA);
pub const CRC_14_DARC: CrcParameters = variant!("CRC-14/DARC", 14, 0x0805, 0x0000, true, true, 0x0000, 0x082D);
pub const CRC_15: CrcParameters = variant!("CRC-15", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059E);
pub const CRC_15_MPT1327: CrcParameters = variant!("CRC-15/MPT1327", 15, 0x6815, 0x0000, false, false, 0x0001, 0x2566);
/// Same parameters as XMODEM.
pub const CRC_16: CrcParameters = variant!("CRC-16", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
pub const CRC_ARC: CrcParameters = variant!("ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);
pub const CRC_16_AUG_CCITT: CrcParameters = variant!("CRC-16/AUG-CCITT", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC);
pub const CRC_16_BUYPASS: CrcParameters = variant!("CRC-16/BUYPASS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8);
pub const CRC_16_CCITT_FALSE: CrcParameters = variant!("CRC-16/CCITT-FALSE", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
pub const CRC_16_CDMA2000: CrcParameters = variant!("CRC-16/CDMA2000", 16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06);
pub const CRC_16_DDS_110: CrcParameters = variant!("CRC-16/DDS-110", 16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF);
pub const CRC_16_DECT_R: CrcParameters = variant!("CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007E);
pub const CRC_16_DECT_X: CrcParameters = variant!("CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007F);
pub const CRC_16_DNP: CrcParameters = variant!("CRC-16/DNP", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82);
pub const CRC_16_EN_13757: CrcParameters = variant!("CRC-16/EN-13757", 16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7);
pub const CRC_16_GENIBUS: CrcParameters = variant!("CRC-16/GENIBUS", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E);
pub const CRC_16_MAXIM: CrcParameters = variant!("CRC-16/MAXIM", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);
pub const CRC_16_MCRF4XX: CrcParameters = variant!("CRC-16/MCRF4XX", 16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91);
pub const CRC_16_RIELLO: CrcParameters = variant!("CRC-16/RIELLO", 16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0);
pub const CRC_16_T10_DIF: CrcParameters = variant!("CRC-16/T10-DIF", 16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB);
pub const CRC_16_TELEDISK: CrcParameters = variant!("CRC-16/TELEDISK", 16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3);
pub const CRC_16_TMS37157: CrcParameters = variant!("CRC-16/TMS37157", 16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1);
pub const CRC_16_USB: CrcParameters = variant!("CRC-16/USB", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8);
pub const CRC_A: CrcParameters = variant!("CRC-A", 16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05);
/// Also known as KERMIT.
pub const CRC_16_CCITT: CrcParameters = variant!("CRC-16/CCITT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189);
pub const CRC_MODBUS: CrcParameters = variant!("MODBUS", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);
pub const CRC_X_25: CrcParameters = variant!("X-25", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
pub const CRC_XMODEM: CrcParameters = variant!("XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
pub const CRC_24: CrcParameters = variant!("CRC-24", 24, 0x864CFB, 0xB704CE, false, false, 0x000000, 0x21CF02);
pub const CRC_24_FLEXRAY_A: CrcParameters = variant!("CRC-24/FLEXRAY-A", 24, 0x5D6DCB, 0xFEDCBA, false, false, 0x000000, 0x7979BD);
pub const CRC_24_FLEXRAY_B: CrcParameters = variant!("CRC-24/FLEXRAY-B", 24, 0x5D6DCB, 0xABCDEF, false, false, 0x000000, 0x1F23B8);
pub const CRC_31_PHILIPS: CrcParameters = variant!("CRC-31/PHILIPS", 31, 0x04C11DB7, 0x7FFFFFFF, false, false, 0x7FFFFFFF, 0x0CE9E46C);
/// Ethernet, zlib, PNG.
pub const CRC_32: CrcParameters = variant!("CRC-32", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926);
pub const CRC_32_BZIP2: CrcParameters = variant!("CRC-32/BZIP2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF, 0xFC891918);
pub const CRC_32C: CrcParameters = variant!("CRC-32C", 32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283);
pub const CRC_32D: CrcParameters = variant!("CRC-32D", 32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x87315576);
pub const CRC_32_MPEG_2: CrcParameters = variant!("CRC-32/MPEG-2", 32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000, 0x0376E6E7);
pub const CRC_32_POSIX: CrcParameters = variant!("CRC-32/POSIX", 32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF, 0x765E7680);
pub const CRC_32Q: CrcParameters = variant!("CRC-32Q", 32, 0x814141AB, 0x00000000, false, false, 0x00000000, 0x3010BF7F);
pub const CRC_JAMCRC: CrcParameters = variant!("JAMCRC", 32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000, 0x340BC6D9);
pub const CRC_XFER: CrcParameters = variant!("XFER", 32, 0x000000AF, 0x00000000, false, false, 0x00000000, 0xBD0BE338);
pub const CRC_40_GSM: CrcParameters = variant!("CRC-40/GSM", 40, 0x0004820009, 0x0000000000, false, false, 0xFFFFFFFFFF, 0xD4164FC646);
pub const CRC_64: CrcParameters = variant!("CRC-64", 64, 0x42F0E1EBA9EA3693, 0x0000000000000000, false, false, 0x0000000000000000, 0x6C40DF5F0B497347);
pub const CRC_64_WE: CrcParameters = variant!("CRC-64/WE", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, false, false, 0xFFFFFFFFFFFFFFFF, 0x62EC59E3F1A4F00A);
pub const CRC_64_XZ: CrcParameters = variant!("CRC-64/XZ", 64, 0x42F0E1EBA9EA3693, 0xFFFFFFFFFFFFFFFF, true, true, 0xFFFFFFFFFFFFFFFF, 0x995DC9BBDF1939FA);
/// Does not fit in 64 bits.
pub const CRC_82_DARC: CrcParameters = variant!("CRC-82/DARC", 82, 0x0308C0111011401440411, 0x000000000000000000000, true, true, 0x000000000000000000000, 0x09EA83F625023801FD612);

/// Every named variant, ordered by width.
pub static CATALOG: &[CrcParameters] = &[
    CRC_3_ROHC,
    CRC_4_ITU,
    CRC_5_EPC,
    CRC_5_ITU,
    CRC_5_USB,
    CRC_6_CDMA2000_A,
    CRC_6_CDMA2000_B,
    CRC_6_DARC,
    CRC_6_ITU,
    CRC_7,
    CRC_7_ROHC,
    CRC_8,
    CRC_8_CDMA2000,
    CRC_8_DARC,
    CRC_8_DVB_S2,
    CRC_8_EBU,
    CRC_8_I_CODE,
    CRC_8_ITU,
    CRC_8_MAXIM,
    CRC_8_ROHC,
    CRC_8_WCDMA,
    CRC_10,
    CRC_10_CDMA2000,
    CRC_11,
    CRC_12_3GPP,
    CRC_12_CDMA2000,
    CRC_12_DECT,
    CRC_13_BBC,
    CRC_14_DARC,
    CRC_15,
    CRC_15_MPT1327,
    CRC_16,
    CRC_ARC,
    CRC_16_AUG_CCITT,
    CRC_16_BUYPASS,
    CRC_16_CCITT_FALSE,
    CRC_16_CDMA2000,
    CRC_16_DDS_110,
    CRC_16_DECT_R,
    CRC_16_DECT_X,
    CRC_16_DNP,
    CRC_16_EN_13757,
    CRC_16_GENIBUS,
    CRC_16_MAXIM,
    CRC_16_MCRF4XX,
    CRC_16_RIELLO,
    CRC_16_T10_DIF,
    CRC_16_TELEDISK,
    CRC_16_TMS37157,
    CRC_16_USB,
    CRC_A,
    CRC_16_CCITT,
    CRC_MODBUS,
    CRC_X_25,
    CRC_XMODEM,
    CRC_24,
    CRC_24_FLEXRAY_A,
    CRC_24_FLEXRAY_B,
    CRC_31_PHILIPS,
    CRC_32,
    CRC_32_BZIP2,
    CRC_32C,
    CRC_32D,
    CRC_32_MPEG_2,
    CRC_32_POSIX,
    CRC_32Q,
    CRC_JAMCRC,
    CRC_XFER,
    CRC_40_GSM,
    CRC_64,
    CRC_64_WE,
    CRC_64_XZ,
    CRC_82_DARC,
];

// (alias, catalog name)
static ALIASES: &[(&str, &str)] = &[
    ("CRC-16/KERMIT", "CRC-16/CCITT"),
    ("KERMIT", "CRC-16/CCITT"),
    ("CRC-16/ARC", "ARC"),
    ("CRC-16/MODBUS", "MODBUS"),
    ("CRC-16/X-25", "X-25"),
    ("CRC-16/XMODEM", "XMODEM"),
    ("CRC-16/IBM-3740", "CRC-16/CCITT-FALSE"),
    ("CRC-8/SMBUS", "CRC-8"),
    ("CRC-32/ISO-HDLC", "CRC-32"),
    ("CRC-32/ISCSI", "CRC-32C"),
    ("CRC-32/CKSUM", "CRC-32/POSIX"),
    ("CRC-32/JAMCRC", "JAMCRC"),
    ("CRC-32/XFER", "XFER"),
    ("CRC-64/ECMA-182", "CRC-64"),
];

/// All catalog entries.
pub fn all() -> &'static [CrcParameters] {
    CATALOG
}

/// Looks up a variant by name or alias, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static CrcParameters, Error> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |&(_, target)| target);
    CATALOG
        .iter()
        .find(|params| params.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownVariant(name.to_string()))
}

/// A variant that did not reproduce its check value.
#[derive(Debug)]
pub struct CheckFailure {
    pub name: &'static str,
    pub error: Error,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

/// Result of checking one entry.
#[derive(Debug)]
pub struct CheckOutcome {
    pub params: &'static CrcParameters,
    pub result: Result<(), Error>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

fn check(params: &CrcParameters) -> Result<(), Error> {
    CrcEngine::new(*params)?.self_test()
}

/// Checks every catalog entry, one outcome per entry.
pub fn check_all() -> Vec<CheckOutcome> {
    CATALOG
        .iter()
        .map(|params| CheckOutcome {
            params,
            result: check(params),
        })
        .collect()
}

/// Checks the given entries. Returns the number checked, or every failure.
pub fn verify(entries: &[CrcParameters]) -> Result<usize, Error> {
    let mut failures = Vec::new();
    for params in entries {
        if let Err(error) = check(params) {
            warn!(target: params.name, "self-test failed: {}", error);
            failures.push(CheckFailure {
                name: params.name,
                error,
            });
        }
    }
    if failures.is_empty() {
        debug!("self-test passed for {} variants", entries.len());
        Ok(entries.len())
    } else {
        Err(Error::SelfTestFailed(failures))
    }
}

/// Runs the check vector through every catalog entry.
pub fn self_test() -> Result<usize, Error> {
    verify(CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn aliases_resolve() {
        for &(alias, target) in ALIASES {
            assert_eq!(find(alias).unwrap().name, target);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("crc-32/mpeg-2").unwrap(), &CRC_32_MPEG_2);
        assert_eq!(find("Kermit").unwrap(), &CRC_16_CCITT);
    }

    #[test]
    fn unknown_name() {
        match find("CRC-99/NOPE") {
            Err(Error::UnknownVariant(name)) => assert_eq!(name, "CRC-99/NOPE"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn entries_are_valid() {
        for params in CATALOG {
            params.validate().unwrap();
        }
    }
}
