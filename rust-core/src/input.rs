//! Line-oriented text input: `n d` on the first line, `n` expenditures on the second.

use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use log::debug;

use crate::error::InputError;
use crate::models::{Bounds, Request, MAX_DAYS, MAX_EXPENDITURE};

/// Parse the first line into the number of days `n` and the window `d`.
pub fn parse_bounds(line: &str) -> Result<Bounds, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [n, d] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount { got: tokens.len() });
    };
    let (Ok(n_value), Ok(d_value)) = (parse_integer(n), parse_integer(d)) else {
        return Err(InputError::BoundsNotIntegers);
    };

    let days = n_value
        .and_then(|v| usize::try_from(v).ok())
        .filter(|days| (1..=MAX_DAYS).contains(days))
        .ok_or_else(|| InputError::DaysOutOfRange { n: n.to_string() })?;
    let window = d_value
        .and_then(|v| usize::try_from(v).ok())
        .filter(|window| (1..=days).contains(window))
        .ok_or_else(|| InputError::WindowOutOfRange {
            d: d.to_string(),
            n: days,
        })?;

    Ok(Bounds { days, window })
}

/// Parse exactly `days` whitespace-separated expenditures in `0..=200`.
pub fn parse_expenditures(line: &str, days: usize) -> Result<Vec<u32>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != days {
        return Err(InputError::WrongExpenditureCount {
            expected: days,
            got: tokens.len(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let day = i + 1;
            let value = parse_integer(token).map_err(|_| InputError::NotAnInteger {
                day,
                token: token.to_string(),
            })?;
            value
                .and_then(|v| u32::try_from(v).ok())
                .filter(|&v| v <= MAX_EXPENDITURE)
                .ok_or(InputError::ExpenditureOutOfRange { day })
        })
        .collect()
}

/// Read both input lines from `reader`. When `prompt` is set, the question
/// for each line is written to `out` before it is read.
pub fn read_request<R, W>(mut reader: R, mut out: W, prompt: bool) -> Result<Request, InputError>
where
    R: BufRead,
    W: Write,
{
    if prompt {
        writeln!(
            out,
            "Enter the total number of days (n) and the number of previous/trailing days (d) to calculate the median:"
        )?;
        out.flush()?;
    }
    let bounds = parse_bounds(&read_line(&mut reader)?)?;
    debug!("n={} d={}", bounds.days, bounds.window);

    if prompt {
        writeln!(
            out,
            "Enter the expenditures for {} days (space-separated values):",
            bounds.days
        )?;
        out.flush()?;
    }
    let expenditures = parse_expenditures(&read_line(&mut reader)?, bounds.days)?;

    Ok(Request {
        expenditures,
        window: bounds.window,
    })
}

/// Strict integer parse. `Ok(None)` is a well-formed integer too large for
/// `i64`, which every caller treats as out of range.
fn parse_integer(token: &str) -> Result<Option<i64>, ParseIntError> {
    match token.parse::<i64>() {
        Ok(v) => Ok(Some(v)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            // overflow is reported before a later bad digit is seen
            let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(None)
            } else {
                Err(e)
            }
        }
        Err(e) => Err(e),
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounds() {
        assert_eq!(
            parse_bounds("  9 5 \n").unwrap(),
            Bounds { days: 9, window: 5 }
        );
        assert_eq!(
            parse_bounds("1\t1").unwrap(),
            Bounds { days: 1, window: 1 }
        );
    }

    #[test]
    fn test_parse_bounds_token_count() {
        assert!(matches!(
            parse_bounds("9"),
            Err(InputError::WrongTokenCount { got: 1 })
        ));
        assert!(matches!(
            parse_bounds("9 5 1"),
            Err(InputError::WrongTokenCount { got: 3 })
        ));
        assert!(matches!(
            parse_bounds(""),
            Err(InputError::WrongTokenCount { got: 0 })
        ));
    }

    #[test]
    fn test_parse_bounds_rejects_trailing_garbage() {
        assert!(matches!(
            parse_bounds("9x 5"),
            Err(InputError::BoundsNotIntegers)
        ));
        assert!(matches!(
            parse_bounds("9 5.0"),
            Err(InputError::BoundsNotIntegers)
        ));
    }

    #[test]
    fn test_parse_bounds_ranges() {
        assert!(matches!(
            parse_bounds("0 1"),
            Err(InputError::DaysOutOfRange { n }) if n == "0"
        ));
        assert!(matches!(
            parse_bounds("200001 1"),
            Err(InputError::DaysOutOfRange { n }) if n == "200001"
        ));
        assert!(matches!(
            parse_bounds("5 6"),
            Err(InputError::WindowOutOfRange { d, n: 5 }) if d == "6"
        ));
        assert!(matches!(
            parse_bounds("5 -1"),
            Err(InputError::WindowOutOfRange { d, n: 5 }) if d == "-1"
        ));
        assert_eq!(
            parse_bounds("5 6").unwrap_err().to_string(),
            "Invalid input: you entered d=6, but d must be between 1 and n=5."
        );
    }

    #[test]
    fn test_oversized_integers_are_out_of_range() {
        assert_eq!(
            parse_bounds("99999999999999999999 1").unwrap_err().to_string(),
            "Invalid input: you entered n=99999999999999999999, but n must be between 1 and 200000."
        );
        assert!(matches!(
            parse_bounds("5 -99999999999999999999"),
            Err(InputError::WindowOutOfRange { d, n: 5 }) if d == "-99999999999999999999"
        ));
        assert!(matches!(
            parse_expenditures("1 99999999999999999999", 2),
            Err(InputError::ExpenditureOutOfRange { day: 2 })
        ));
        assert!(matches!(
            parse_expenditures("99999999999999999999x", 1),
            Err(InputError::NotAnInteger { day: 1, .. })
        ));
    }

    #[test]
    fn test_parse_expenditures() {
        assert_eq!(
            parse_expenditures("2 3 4 2 3 6 8 4 5", 9).unwrap(),
            vec![2, 3, 4, 2, 3, 6, 8, 4, 5]
        );
        assert_eq!(parse_expenditures("0 200", 2).unwrap(), vec![0, 200]);
    }

    #[test]
    fn test_parse_expenditures_errors() {
        assert!(matches!(
            parse_expenditures("1 2", 3),
            Err(InputError::WrongExpenditureCount {
                expected: 3,
                got: 2
            })
        ));
        match parse_expenditures("1 12abc 3", 3) {
            Err(InputError::NotAnInteger { day, token }) => {
                assert_eq!(day, 2);
                assert_eq!(token, "12abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_expenditures("1 2 201", 3),
            Err(InputError::ExpenditureOutOfRange { day: 3 })
        ));
        assert!(matches!(
            parse_expenditures("-1", 1),
            Err(InputError::ExpenditureOutOfRange { day: 1 })
        ));
    }

    #[test]
    fn test_read_request_with_prompts() {
        let input = b"5 4\n1 2 3 4 4\n";
        let mut out = Vec::new();
        let request = read_request(&input[..], &mut out, true).unwrap();
        assert_eq!(request.expenditures, vec![1, 2, 3, 4, 4]);
        assert_eq!(request.window, 4);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Enter the expenditures for 5 days"));
    }

    #[test]
    fn test_read_request_quiet() {
        let mut out = Vec::new();
        read_request(&b"1 1\n7"[..], &mut out, false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_read_request_eof() {
        let mut out = Vec::new();
        assert!(matches!(
            read_request(&b"3 2\n"[..], &mut out, false),
            Err(InputError::UnexpectedEof)
        ));
    }
}
