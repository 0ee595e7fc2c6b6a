/// Error code registry for config-composer
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Computation errors
/// - 3000-3999: Output errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_MISSING_FIELD: u16 = 1001;
    pub const CONFIG_INVALID_TYPE: u16 = 1002;

    // Computation errors (2000-2999)
    pub const COMPUTE_GENERIC: u16 = 2000;
    pub const COMPUTE_INVALID_ARGUMENT: u16 = 2001;
    pub const COMPUTE_OVERFLOW: u16 = 2002;
    pub const COMPUTE_NONDETERMINISTIC: u16 = 2003;

    // Output errors (3000-3999)
    pub const OUTPUT_GENERIC: u16 = 3000;
    pub const OUTPUT_SERIALIZATION: u16 = 3001;
    pub const OUTPUT_WRITE_FAILED: u16 = 3002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Required configuration field is missing",
        1002 => "Configuration field has the wrong type",

        2000 => "Generic computation error",
        2001 => "Library function received an argument outside its domain",
        2002 => "Integer overflow during computation",
        2003 => "Repeated evaluation produced different output",

        3000 => "Generic output error",
        3001 => "Failed to serialize the output record",
        3002 => "Failed to write the output record",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_fall_in_their_category() {
        assert!((1000..2000).contains(&ErrorCode::CONFIG_MISSING_FIELD));
        assert!((2000..3000).contains(&ErrorCode::COMPUTE_OVERFLOW));
        assert!((3000..4000).contains(&ErrorCode::OUTPUT_WRITE_FAILED));
    }

    #[test]
    fn test_describe_error_code() {
        assert_eq!(
            describe_error_code(ErrorCode::CONFIG_MISSING_FIELD),
            "Required configuration field is missing"
        );
        assert_eq!(describe_error_code(4242), "Unknown error code");
    }
}
