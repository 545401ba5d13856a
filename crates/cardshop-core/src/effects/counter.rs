//! Stat counter animation.
//!
//! A counter climbs from zero to its target in a fixed number of equal
//! increments. Each frame renders the floored value with thousands
//! separators; the final frame always shows the exact target.

/// One rendered frame of a counter
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CounterFrame {
    pub value: u64,
    pub label: String,
    /// Set on the final frame only
    pub done: bool,
}

/// Iterator over the frames of one counter run
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: target as f64 / f64::from(steps),
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        if self.current < self.target as f64 {
            self.current += self.increment;
            let value = (self.current.floor() as u64).min(self.target);
            return Some(CounterFrame {
                value,
                label: format_thousands(value),
                done: false,
            });
        }

        self.finished = true;
        Some(CounterFrame {
            value: self.target,
            label: format_thousands(self.target),
            done: true,
        })
    }
}

/// Parse a counter target the lenient way: leading digits only,
/// so `"1500+"` reads as 1500. Returns `None` when there are no digits.
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Render an integer with `,` between thousands groups
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
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
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(25000), "25,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_parse_counter_target() {
        assert_eq!(parse_counter_target("1500"), Some(1500));
        assert_eq!(parse_counter_target(" 1500+ "), Some(1500));
        assert_eq!(parse_counter_target("abc"), None);
        assert_eq!(parse_counter_target(""), None);
    }

    #[test]
    fn test_counter_reaches_target() {
        let frames: Vec<_> = CounterAnimation::new(1000, 100).collect();
        assert_eq!(frames.len(), 101);
        assert_eq!(frames[0].value, 10);
        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.value, 1000);
        assert_eq!(last.label, "1,000");
    }

    #[test]
    fn test_zero_target_is_single_frame() {
        let frames: Vec<_> = CounterAnimation::new(0, 100).collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 0);
        assert!(frames[0].done);
    }

    #[test]
    fn test_small_target_floors() {
        let frames: Vec<_> = CounterAnimation::new(5, 100).collect();
        assert_eq!(frames[0].value, 0);
        assert_eq!(frames.last().unwrap().value, 5);
    }
}
