//! Pre-decode date-range filtering.
//!
//! Filtering happens on the raw header digits before any decode cost is
//! paid: a multi-month log can be cut down to a day without translating a
//! single field. Bounds are prefixes of `YYYYMMDDhhmmss`; comparison
//! truncates both sides to the shorter bound so `--start 2023` and
//! `--start 20230412` both behave as expected.

use crate::dates::header_stamp;

/// Optional half-open `[start, end)` window over header timestamps.
#[derive(Debug, Clone, Default)]
pub struct RangeGate {
    start: Option<String>,
    end: Option<String>,
}

impl RangeGate {
    /// Build a gate from optional bound strings.
    ///
    /// A bound that is not purely numeric is treated as absent.
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: numeric_bound(start),
            end: numeric_bound(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `line` should be handed to the decoder.
    ///
    /// A line whose header digits cannot be extracted passes; the decoder
    /// rejects it properly and the skip is counted there.
    pub fn admits(&self, line: &str) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(stamp) = header_stamp(line) else {
            return true;
        };

        let len = [self.start.as_deref(), self.end.as_deref()]
            .into_iter()
            .flatten()
            .map(str::len)
            .min()
            .unwrap_or(stamp.len())
            .min(stamp.len());
        let stamp = &stamp[..len];

        if let Some(start) = self.start.as_deref() {
            if stamp < &start[..len.min(start.len())] {
                return false;
            }
        }
        if let Some(end) = self.end.as_deref() {
            if stamp >= &end[..len.min(end.len())] {
                return false;
            }
        }
        true
    }
}

fn numeric_bound(bound: Option<&str>) -> Option<String> {
    bound
        .map(str::trim)
        .filter(|b| !b.is_empty() && b.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APR_10: &str = "E202304100900001234R ^S01EVFF";
    const APR_12: &str = "E202304121200001234R ^S01EVFF";
    const APR_14: &str = "E202304142300001234R ^S01EVFF";

    #[test]
    fn test_open_gate_admits_everything() {
        let gate = RangeGate::new(None, None);
        assert!(gate.admits(APR_10));
        assert!(gate.admits("not a header"));
    }

    #[test]
    fn test_window_selects_single_day() {
        let gate = RangeGate::new(Some("20230412"), Some("20230413"));
        assert!(!gate.admits(APR_10));
        assert!(gate.admits(APR_12));
        assert!(!gate.admits(APR_14));
    }

    #[test]
    fn test_end_only_is_strictly_earlier() {
        let gate = RangeGate::new(None, Some("20230411"));
        assert!(gate.admits(APR_10));
        assert!(!gate.admits(APR_12));
        assert!(!gate.admits("E202304110000001234R ^S01EVFF"));
    }

    #[test]
    fn test_start_only() {
        let gate = RangeGate::new(Some("20230412"), None);
        assert!(!gate.admits(APR_10));
        assert!(gate.admits(APR_12));
        assert!(gate.admits(APR_14));
    }

    #[test]
    fn test_start_is_inclusive() {
        let gate = RangeGate::new(Some("20230412"), None);
        assert!(gate.admits("E202304120000001234R ^S01EVFF"));
    }

    #[test]
    fn test_shorter_bound_drives_truncation() {
        // the six-digit end truncates the start to six digits too, so
        // April days below the start's day digits still compare equal
        let gate = RangeGate::new(Some("20230412"), Some("202305"));
        assert!(gate.admits(APR_10));
        assert!(gate.admits(APR_12));
        assert!(!gate.admits("E202305011200001234R ^S01EVFF"));
    }

    #[test]
    fn test_non_numeric_start_treated_absent() {
        let gate = RangeGate::new(Some("yesterday"), Some("20230413"));
        assert!(gate.admits(APR_10));
        assert!(!gate.admits(APR_14));
    }

    #[test]
    fn test_unparseable_header_passes() {
        let gate = RangeGate::new(Some("20230412"), Some("20230413"));
        assert!(gate.admits("garbage line"));
        assert!(gate.admits(""));
    }
}
