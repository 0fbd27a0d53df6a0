use regex::Regex;

/// Inclusive guest-count interval, either bound optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuestCountRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl GuestCountRange {
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    /// An unbounded range constrains nothing and is dropped by the filter
    /// builder.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive containment; an unset bound never constrains.
    pub fn contains(&self, value: i32) -> bool {
        self.min.map_or(true, |lo| value >= lo) && self.max.map_or(true, |hi| value <= hi)
    }
}

/// Parses a human-authored bucket token into a range.
///
/// Recognized forms: "100~150명" → [100, 150], "200명이상" → [200, ∞),
/// "50명이하" → (-∞, 50]. Anything else parses as unbounded, so a malformed
/// bucket degrades to a no-op filter instead of rejecting the whole search.
pub fn parse(bucket: &str) -> GuestCountRange {
    let bucket = bucket.trim();
    if bucket.is_empty() {
        return GuestCountRange::UNBOUNDED;
    }

    if let Some((low, high)) = bucket.split_once('~') {
        return GuestCountRange {
            min: first_number(low),
            max: first_number(high),
        };
    }
    if bucket.contains("이상") {
        return GuestCountRange {
            min: first_number(bucket),
            max: None,
        };
    }
    if bucket.contains("이하") {
        return GuestCountRange {
            min: None,
            max: first_number(bucket),
        };
    }
    GuestCountRange::UNBOUNDED
}

fn first_number(s: &str) -> Option<i32> {
    let re = Regex::new(r"\d+").unwrap();
    re.find(s).and_then(|m| m.as_str().parse::<i32>().ok())
}
