#[cfg(test)]
mod tests {
    extern crate crc_engine as crc;
    use crc::catalog;
    use crc::{ByteOrder, CrcEngine, CrcParameters, Error, CHECK_DATA};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn digest(params: CrcParameters, data: &[u8]) -> u128 {
        CrcEngine::new(params).unwrap().process(data).finalize()
    }

    #[test]
    fn catalog_self_test() {
        init();
        let passed = match catalog::self_test() {
            Ok(n) => n,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(catalog::all().len(), passed);
    }

    #[test]
    fn every_entry_by_name() {
        init();
        for params in catalog::all() {
            let mut crc = CrcEngine::by_name(params.name).unwrap();
            assert_eq!(
                params.check_result,
                crc.process(CHECK_DATA).finalize(),
                "{}",
                params.name
            );
            crc.self_test().unwrap();
        }
    }

    #[test]
    fn check_all_reports_each_entry() {
        init();
        let outcomes = catalog::check_all();
        assert_eq!(catalog::all().len(), outcomes.len());
        assert!(outcomes.iter().all(|outcome| outcome.passed()));
    }

    #[test]
    fn known_vectors() {
        init();
        assert_eq!(0xCBF43926, digest(catalog::CRC_32, CHECK_DATA));
        assert_eq!(0x995DC9BBDF1939FA, digest(catalog::CRC_64_XZ, CHECK_DATA));

        let xmodem = CrcParameters::new(16, 0x1021);
        assert_eq!(0x31C3, digest(xmodem, CHECK_DATA));

        let crc8 = CrcParameters::new(8, 0x07);
        assert_eq!(0xF4, digest(crc8, CHECK_DATA));
        // Pre-setting and inverting the register gives a different digest.
        assert_eq!(0x04, digest(crc8.init(0xFF).xor_output(0xFF), CHECK_DATA));
    }

    #[test]
    fn wide_register() {
        init();
        assert_eq!(
            0x09EA83F625023801FD612,
            digest(catalog::CRC_82_DARC, CHECK_DATA)
        );
        assert_eq!(0xD4164FC646, digest(catalog::CRC_40_GSM, CHECK_DATA));
    }

    #[test]
    fn sub_byte_registers() {
        init();
        assert_eq!(0x6, digest(catalog::CRC_3_ROHC, CHECK_DATA));
        assert_eq!(0x7, digest(catalog::CRC_4_ITU, CHECK_DATA));
        assert_eq!(0x19, digest(catalog::CRC_5_USB, CHECK_DATA));
        assert_eq!(0x0D, digest(catalog::CRC_6_CDMA2000_A, CHECK_DATA));
        assert_eq!(0x53, digest(catalog::CRC_7_ROHC, CHECK_DATA));
    }

    #[test]
    fn digest_bytes() {
        init();
        let mut crc = CrcEngine::new(catalog::CRC_32).unwrap();
        crc.process(CHECK_DATA);
        assert_eq!(vec![0xCB, 0xF4, 0x39, 0x26], crc.finalize_bytes(ByteOrder::BigEndian));
        assert_eq!(vec![0x26, 0x39, 0xF4, 0xCB], crc.finalize_bytes(ByteOrder::LittleEndian));
        assert_eq!("CBF43926", crc.finalize_hex());

        let mut crc = CrcEngine::new(catalog::CRC_12_3GPP).unwrap();
        crc.process(CHECK_DATA);
        assert_eq!(vec![0x0D, 0xAF], crc.finalize_bytes(ByteOrder::BigEndian));
        assert_eq!("0DAF", crc.finalize_hex());
    }

    #[test]
    fn verify_collects_every_failure() {
        init();
        let entries = [
            catalog::CRC_16_USB,
            catalog::CRC_32.check(0x1234),
            catalog::CRC_8_MAXIM,
            catalog::CRC_3_ROHC.check(0x0),
        ];
        match catalog::verify(&entries) {
            Err(Error::SelfTestFailed(failures)) => {
                let names: Vec<_> = failures.iter().map(|failure| failure.name).collect();
                assert_eq!(vec!["CRC-32", "CRC-3/ROHC"], names);
                match &failures[0].error {
                    Error::CheckMismatch { expected, actual, .. } => {
                        assert_eq!(0x1234, *expected);
                        assert_eq!(0xCBF43926, *actual);
                    }
                    other => panic!("unexpected {:?}", other),
                }
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn kermit_alias() {
        init();
        let kermit = CrcEngine::by_name("CRC-16/KERMIT").unwrap();
        assert_eq!("CRC-16/CCITT", kermit.parameters().name);
        match CrcEngine::by_name("CRC-16/UNKNOWN") {
            Err(Error::UnknownVariant(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
