//! Constants for fee calculation and process exit codes.

/// Charge applied to every stay, covering the first `DEFAULT_FLAT_HOURS` hours.
pub const DEFAULT_FLAT_CHARGE: u64 = 10;

/// Number of hours included in the flat charge.
pub const DEFAULT_FLAT_HOURS: u64 = 2;

/// Charge for each started hour beyond the flat-rate window.
pub const DEFAULT_HOURLY_RATE: u64 = 10;

/// Largest lot `create` accepts. Slot storage is allocated up front.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Exit codes for the `parker` binary.
pub mod exit_codes {
    /// All command lines were accepted.
    pub const SUCCESS: i32 = 0;
    /// At least one command line was rejected, or output could not be written.
    pub const ERROR_COMMAND: i32 = 1;
    /// Input file missing, unreadable, or empty.
    pub const ERROR_INPUT: i32 = 2;
    /// A slot pool invariant was violated (internal bug).
    pub const ERROR_INVARIANT: i32 = 70;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_matches_fee_table() {
        assert_eq!(DEFAULT_FLAT_CHARGE, 10);
        assert_eq!(DEFAULT_FLAT_HOURS, 2);
        assert_eq!(DEFAULT_HOURLY_RATE, 10);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_COMMAND,
            exit_codes::ERROR_INPUT,
            exit_codes::ERROR_INVARIANT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
