#![no_main]

use contract_errors::{ErrorCode, ErrorType, grammar};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(name) = std::str::from_utf8(rest) else {
        return;
    };
    let code = ErrorCode::ALL[selector as usize % ErrorCode::ALL.len()];

    assert_eq!(grammar::matches_name_pattern(name), grammar::is_valid_name(name));

    match ErrorType::new(code, name.to_owned()) {
        Ok(et) => {
            assert_eq!(et.code(), code);
            assert_eq!(et.name(), name);
        }
        Err(err) => {
            let mut buffer = String::new();
            err.log().write_to(&mut buffer).unwrap();
            assert!(buffer.len() < 1200);
        }
    }
});
