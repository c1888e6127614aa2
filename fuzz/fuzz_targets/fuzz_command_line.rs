#![no_main]

use libfuzzer_sys::fuzz_target;

use parker_cli::{parse_line, PlateCheck, Session, SessionOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for line in text.lines() {
        // Should not panic
        let _ = parse_line(line, PlateCheck::Strict);
        let _ = parse_line(line, PlateCheck::Lenient);
    }

    let mut session = Session::new(SessionOptions::default());
    let _ = session.execute_line("create_parking_lot 4");
    for line in text.lines() {
        if let Err(err) = session.execute_line(line) {
            assert!(!err.is_invariant_violation(), "{line:?}: {err}");
        }
    }
});
