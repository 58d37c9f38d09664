#![no_main]
use libfuzzer_sys::fuzz_target;
use spring_courier::{service::ServiceLimits, wrap_with_limits};

fuzz_target!(|input: (String, u8, bool)| {
    let (address, limit, hard) = input;
    let limit = usize::from(limit.max(1));
    let limits = if hard { ServiceLimits::hard(limit) } else { ServiceLimits::soft(limit) };
    if let Ok(lines) = wrap_with_limits(&address, &limits) {
        assert!(lines.len() <= 3);
        if hard {
            assert!(lines.iter().all(|line| line.chars().count() <= limit));
        }
    }
});
