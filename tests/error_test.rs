#[cfg(test)]
mod tests {
    extern crate crc_engine as crc;
    use crc::catalog;
    use crc::{CrcEngine, CrcParameters, Error, Strategy, CHECK_DATA};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn zero_width() {
        init();
        match CrcEngine::new(CrcParameters::new(0, 0)) {
            Err(Error::InvalidWidth(0)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn too_wide() {
        init();
        match CrcEngine::new(CrcParameters::new(129, 0x1)) {
            Err(Error::InvalidWidth(129)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn polynomial_out_of_range() {
        init();
        // top bit of the generator must not be stored
        match CrcEngine::new(CrcParameters::new(8, 0x107)) {
            Err(Error::ValueOutOfRange { field, value, width }) => {
                assert_eq!("polynomial", field);
                assert_eq!(0x107, value);
                assert_eq!(8, width);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn init_and_xor_out_of_range() {
        init();
        let params = CrcParameters::new(5, 0x05);
        match params.init(0x20).validate() {
            Err(Error::ValueOutOfRange { field, .. }) => assert_eq!("init_value", field),
            other => panic!("unexpected {:?}", other),
        }
        match params.xor_output(0x3F).validate() {
            Err(Error::ValueOutOfRange { field, .. }) => assert_eq!("xor_output", field),
            other => panic!("unexpected {:?}", other),
        }
        assert!(params.init(0x1F).xor_output(0x1F).validate().is_ok());
    }

    #[test]
    fn strategy_mismatch() {
        init();
        match CrcEngine::with_strategy(catalog::CRC_24, Strategy::Native32) {
            Err(Error::StrategyMismatch { strategy, width }) => {
                assert_eq!(Strategy::Native32, strategy);
                assert_eq!(24, width);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn integer_values() {
        init();
        let values: Vec<i64> = CHECK_DATA.iter().map(|&b| i64::from(b)).collect();
        let mut crc = CrcEngine::new(catalog::CRC_32).unwrap();
        assert_eq!(0xCBF43926, crc.try_process_values(values).unwrap().finalize());
    }

    #[test]
    fn value_above_byte_range() {
        init();
        let mut crc = CrcEngine::new(catalog::CRC_32).unwrap();
        match crc.try_process_values(vec![0x31u32, 0x32, 0x100, 0x33]) {
            Err(Error::ByteOutOfRange { index, value }) => {
                assert_eq!(2, index);
                assert_eq!(0x100, value);
            }
            other => panic!("unexpected {:?}", other),
        }
        // engine is usable again after a reset
        crc.reset();
        assert_eq!(0xCBF43926, crc.process(CHECK_DATA).finalize());
    }

    #[test]
    fn negative_value() {
        init();
        let mut crc = CrcEngine::new(catalog::CRC_8).unwrap();
        match crc.try_process_values(vec![-1i32]) {
            Err(Error::ByteOutOfRange { index: 0, value: -1 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn self_test_mismatch() {
        init();
        let crc = CrcEngine::new(catalog::CRC_16_USB.check(0xB4C9)).unwrap();
        match crc.self_test() {
            Err(Error::CheckMismatch { name, expected, actual }) => {
                assert_eq!("CRC-16/USB", name);
                assert_eq!(0xB4C9, expected);
                assert_eq!(0xB4C8, actual);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            "polynomial 0x107 does not fit in 8 bits",
            CrcParameters::new(8, 0x107).validate().unwrap_err().to_string()
        );
        assert_eq!(
            "unknown CRC variant \"CRC-0\"",
            catalog::find("CRC-0").unwrap_err().to_string()
        );
    }
}
