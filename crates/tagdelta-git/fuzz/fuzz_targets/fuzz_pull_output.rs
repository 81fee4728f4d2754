#![no_main]

use libfuzzer_sys::fuzz_target;
use tagdelta_git::{PullOutcome, classify_pull_output};

fuzz_target!(|data: &[u8]| {
    let message = String::from_utf8_lossy(data);
    match classify_pull_output(&message) {
        PullOutcome::Succeeded => {}
        PullOutcome::Failed(reason) => assert_eq!(reason, message.trim()),
    }
});
