//! Exit code constants for the docketpost CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid input files, bad config)
//! - 2: Template failure (malformed skeleton, missing field)
//! - 3: Publish failure
//! - 4: Subscription store failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Template failure: malformed skeleton or a placeholder without a value.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Publish failure: the publisher rejected the post or could not run.
pub const PUBLISH_FAILURE: i32 = 3;

/// Store failure: the subscription store could not be read or written.
pub const STORE_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            TEMPLATE_FAILURE,
            PUBLISH_FAILURE,
            STORE_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_fit_in_a_byte() {
        for code in [SUCCESS, USER_ERROR, TEMPLATE_FAILURE, PUBLISH_FAILURE, STORE_FAILURE] {
            assert!((0..=255).contains(&code));
        }
    }
}
