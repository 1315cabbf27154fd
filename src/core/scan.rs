use crate::domain::model::{RejectedToken, ScanOutcome};

/// Parses whitespace-separated integer literals until the stream ends or a
/// token fails to parse. The failing token stops the scan silently; everything
/// parsed before it is kept. Mirrors stream-extraction semantics where a bad
/// token ends reading rather than raising an error.
pub fn scan_integers(input: &str) -> ScanOutcome {
    let mut values = Vec::new();
    let mut rejected = None;

    for (position, token) in input.split_whitespace().enumerate() {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                rejected = Some(RejectedToken {
                    token: token.to_string(),
                    position,
                });
                break;
            }
        }
    }

    ScanOutcome { values, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_space_separated() {
        let outcome = scan_integers("4 1 2 1 2");
        assert_eq!(outcome.values, vec![4, 1, 2, 1, 2]);
        assert!(!outcome.truncated());
    }

    #[test]
    fn test_scan_mixed_whitespace() {
        let outcome = scan_integers("5 5\n9\t9\n  7\n");
        assert_eq!(outcome.values, vec![5, 5, 9, 9, 7]);
        assert!(outcome.rejected.is_none());
    }

    #[test]
    fn test_scan_empty_input() {
        let outcome = scan_integers("");
        assert!(outcome.values.is_empty());
        assert!(!outcome.truncated());

        let whitespace_only = scan_integers("   \n\t ");
        assert!(whitespace_only.values.is_empty());
    }

    #[test]
    fn test_scan_negative_and_signed() {
        let outcome = scan_integers("-3 +8 -3");
        assert_eq!(outcome.values, vec![-3, 8, -3]);
    }

    #[test]
    fn test_scan_stops_at_first_malformed_token() {
        let outcome = scan_integers("1 2 oops 3 4");
        assert_eq!(outcome.values, vec![1, 2]);
        let rejected = outcome.rejected.unwrap();
        assert_eq!(rejected.token, "oops");
        assert_eq!(rejected.position, 2);
    }

    #[test]
    fn test_scan_partial_numeric_token_is_malformed() {
        // "12abc" is one token and fails as a whole
        let outcome = scan_integers("7 12abc 7");
        assert_eq!(outcome.values, vec![7]);
        assert_eq!(outcome.rejected.unwrap().token, "12abc");
    }

    #[test]
    fn test_scan_overflowing_literal_is_malformed() {
        let outcome = scan_integers("1 99999999999999999999999999 1");
        assert_eq!(outcome.values, vec![1]);
        assert!(outcome.truncated());
    }

    #[test]
    fn test_scan_leading_malformed_token_keeps_nothing() {
        let outcome = scan_integers("x 1 2");
        assert!(outcome.values.is_empty());
        assert_eq!(outcome.rejected.unwrap().position, 0);
    }
}
