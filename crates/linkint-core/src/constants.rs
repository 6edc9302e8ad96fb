//! Constants shared by the arithmetic and the command-line front end.

/// Every node of a `BigInt` holds one digit in this base.
pub const RADIX: u8 = 10;

/// Largest value a single digit node may hold.
pub const MAX_DIGIT: u8 = RADIX - 1;

/// Process exit codes used by the `linkint` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid operand, operator, or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
