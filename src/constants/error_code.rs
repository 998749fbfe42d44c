// On-Chain Error Code Table
//
// The program surfaces failures as numeric codes in the 6000 range. The
// SDK only translates them to short strings for display; it never
// produces these codes itself.

/// First error code emitted by the program
pub const ERROR_CODE_BASE: u32 = 6000;

/// Numeric error code -> short human-readable tag
pub static ERROR_TABLE: &[(u32, &str)] = &[
    (6000, "paused"),
    (6001, "invalid_amp"),
    (6002, "math_overflow"),
    (6003, "zero_amount"),
    (6004, "slippage_exceeded"),
    (6005, "invalid_invariant"),
    (6006, "insufficient_liquidity"),
    (6007, "vault_mismatch"),
    (6008, "expired"),
    (6009, "already_initialized"),
    (6010, "unauthorized"),
    (6011, "ramp_constraint"),
    (6012, "locked"),
    (6013, "farming_error"),
    (6014, "invalid_owner"),
    (6015, "invalid_discriminator"),
    (6016, "cpi_failed"),
    (6017, "full"),
    (6018, "circuit_breaker"),
    (6019, "oracle_error"),
    (6020, "rate_limit"),
    (6021, "governance_error"),
    (6022, "order_error"),
    (6023, "tick_error"),
    (6024, "range_error"),
    (6025, "flash_error"),
    (6026, "cooldown"),
    (6027, "mev_protection"),
    (6028, "stale_data"),
    (6029, "bias_error"),
    (6030, "duration_error"),
];

/// Translate an on-chain error code; unknown codes return None
pub fn error_message(code: u32) -> Option<&'static str> {
    ERROR_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| *msg)
}
