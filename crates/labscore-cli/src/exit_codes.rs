//! Process exit codes. Part of the public contract.

use labscore_core::thresholds::RunVerdict;

pub const PASS: i32 = 0; // global pass rate >= 0.8
pub const PARTIAL: i32 = 1; // global pass rate >= 0.5
pub const FAIL: i32 = 2; // below 0.5, or nothing was evaluated
pub const CONFIG_ERROR: i32 = 2; // bad arguments or unreadable input for `validate`

pub fn for_verdict(verdict: RunVerdict) -> i32 {
    match verdict {
        RunVerdict::Pass => PASS,
        RunVerdict::Partial => PARTIAL,
        RunVerdict::Fail | RunVerdict::Empty => FAIL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_mapping() {
        assert_eq!(for_verdict(RunVerdict::Pass), 0);
        assert_eq!(for_verdict(RunVerdict::Partial), 1);
        assert_eq!(for_verdict(RunVerdict::Fail), 2);
        assert_eq!(for_verdict(RunVerdict::Empty), 2);
    }
}
