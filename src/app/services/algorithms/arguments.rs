//! Parsing of algorithm argument tokens
//!
//! The configuration hands every algorithm the whitespace separated tokens
//! found under `PARAM::ALGO`. These helpers turn them into typed values and
//! report problems as [`Error::InvalidArgument`] naming the algorithm.

use crate::{Error, Result};
use std::str::FromStr;

/// Token enabling the soft mode of the bounding filters
pub const SOFT_FLAG: &str = "soft";

/// Check the number of tokens against an inclusive range
pub fn expect_count(algorithm: &str, args: &[String], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };
        return Err(Error::invalid_argument(
            algorithm,
            format!(
                "wrong number of arguments: expected {expected}, got {}",
                args.len()
            ),
        ));
    }
    Ok(())
}

/// Reject any argument for algorithms that take none
pub fn expect_none(algorithm: &str, args: &[String]) -> Result<()> {
    expect_count(algorithm, args, 0, 0)
}

/// Parse one numeric token
pub fn parse_number(algorithm: &str, token: &str) -> Result<f64> {
    let value: f64 = token.trim().parse().map_err(|_| {
        Error::invalid_argument(algorithm, format!("'{token}' is not a number"))
    })?;

    if !value.is_finite() {
        return Err(Error::invalid_argument(
            algorithm,
            format!("'{token}' is not a finite number"),
        ));
    }

    Ok(value)
}

/// Parse between `min` and `max` numeric tokens
pub fn convert_numbers(algorithm: &str, args: &[String], min: usize, max: usize) -> Result<Vec<f64>> {
    expect_count(algorithm, args, min, max)?;
    args.iter().map(|token| parse_number(algorithm, token)).collect()
}

/// Split off a leading `soft` token
///
/// The flag is only recognized when followed by at least one other token, so
/// a lone `soft` is reported as a non-numeric argument.
pub fn take_soft_flag(args: &[String]) -> (bool, &[String]) {
    match args.split_first() {
        Some((first, rest)) if !rest.is_empty() && first.eq_ignore_ascii_case(SOFT_FLAG) => {
            (true, rest)
        }
        _ => (false, args),
    }
}

/// Parse a keyword into a closed enumeration
pub fn parse_keyword<E>(algorithm: &str, token: &str) -> Result<E>
where
    E: FromStr,
{
    token.trim().parse::<E>().map_err(|_| {
        Error::invalid_argument(algorithm, format!("unknown keyword '{token}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expect_count() {
        assert!(expect_count("CST", &tokens(&["1"]), 1, 1).is_ok());
        let err = expect_count("CST", &tokens(&[]), 1, 1).unwrap_err();
        assert!(err.to_string().contains("CST"));
        assert!(expect_count("MAX", &tokens(&["1", "2", "3"]), 1, 2).is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("CST", "0.7").unwrap(), 0.7);
        assert_eq!(parse_number("CST", "-5e2").unwrap(), -500.0);
        assert!(parse_number("CST", "abc").is_err());
        assert!(parse_number("CST", "NaN").is_err());
        assert!(parse_number("CST", "inf").is_err());
    }

    #[test]
    fn test_take_soft_flag() {
        let args = tokens(&["SOFT", "300", "280"]);
        let (soft, rest) = take_soft_flag(&args);
        assert!(soft);
        assert_eq!(rest, &tokens(&["300", "280"])[..]);

        let args = tokens(&["300"]);
        let (soft, rest) = take_soft_flag(&args);
        assert!(!soft);
        assert_eq!(rest.len(), 1);

        let args = tokens(&["soft"]);
        let (soft, rest) = take_soft_flag(&args);
        assert!(!soft);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_convert_numbers_rejects_words() {
        let err = convert_numbers("MAX", &tokens(&["soft"]), 1, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
