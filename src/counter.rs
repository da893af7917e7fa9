use std::time::Duration;

use crate::animate::Animation;

pub const COUNT_DURATION: Duration = Duration::from_millis(2000);
pub const COUNT_STEPS: u32 = 60;

/// Counts from zero up to `end` over [`COUNT_DURATION`] in [`COUNT_STEPS`] steps.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    end: u64,
    step: u32,
}

impl CountUp {
    pub fn new(end: u64) -> Self {
        Self { end, step: 0 }
    }

    pub fn value(&self) -> u64 {
        if self.step >= COUNT_STEPS {
            self.end
        } else {
            // integer math so the last step lands exactly on `end`
            (self.end as u128 * self.step as u128 / COUNT_STEPS as u128) as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.step >= COUNT_STEPS
    }
}

impl Animation for CountUp {
    type Frame = u64;

    fn next_delay(&self) -> Option<Duration> {
        (!self.is_done()).then(|| COUNT_DURATION / COUNT_STEPS)
    }

    fn step(&mut self) -> bool {
        let before = self.value();
        self.step += 1;
        self.value() != before
    }

    fn frame(&self) -> u64 {
        self.value()
    }
}

/// Format with comma thousands separators, e.g. `180000` -> `"180,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_reaches_end() {
        let mut count = CountUp::new(180_000);
        assert_eq!(count.frame(), 0);
        let mut total = Duration::ZERO;
        let mut last = 0;
        while let Some(delay) = count.next_delay() {
            total += delay;
            count.step();
            assert!(count.value() >= last);
            last = count.value();
        }
        assert_eq!(count.value(), 180_000);
        assert!(count.is_done());
        assert!(total <= COUNT_DURATION);
        assert!(COUNT_DURATION - total < Duration::from_millis(1));
    }

    #[test]
    fn test_small_counts_skip_repeats() {
        let mut count = CountUp::new(7);
        let changes = (0..COUNT_STEPS).filter(|_| count.step()).count();
        assert_eq!(changes, 7);
        assert_eq!(count.value(), 7);
    }

    #[test]
    fn test_midpoint() {
        let mut count = CountUp::new(950);
        for _ in 0..30 {
            count.step();
        }
        assert_eq!(count.value(), 475);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1300), "1,300");
        assert_eq!(format_thousands(180_000), "180,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
