use std::time::{SystemTime, UNIX_EPOCH};

use clipstash_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time before UNIX EPOCH")
            .as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_epoch_millis_and_monotone_enough() {
        let clock = SystemClock;
        let first = clock.now_ms();
        let second = clock.now_ms();

        // 2020-01-01 in epoch millis; anything earlier means a unit mix-up.
        assert!(first > 1_577_836_800_000);
        assert!(second >= first);
    }
}
