#![no_main]

use libfuzzer_sys::fuzz_target;

use sealbid_auction::Journal;

// Decoding arbitrary journal text must never panic, and anything that
// decodes must re-encode to text that decodes to the same journal.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(journal) = Journal::from_json_lines(text) {
        if let Ok(encoded) = journal.to_json_lines() {
            let again = Journal::from_json_lines(&encoded).ok();
            assert_eq!(again.as_ref(), Some(&journal));
        }
    }
});
