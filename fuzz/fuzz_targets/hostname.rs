// SPDX-License-Identifier: Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use safeweb_core::hostname::{MAX_HOSTNAME_LEN, check_hostname, is_valid_hostname};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let first = is_valid_hostname(s);
        assert_eq!(first, is_valid_hostname(s));
        assert_eq!(first, check_hostname(s).is_ok());

        if first {
            assert!(s.chars().count() <= MAX_HOSTNAME_LEN);
            assert!(s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-'));
        }
    }
});
