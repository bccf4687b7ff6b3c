use crate::{Coord, SparseGrid};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRleError {
    #[error("pattern has no `x = .., y = ..` header line")]
    MissingHeader,
    #[error("malformed header field `{0}`")]
    InvalidHeader(String),
    #[error("rule `{0}` is not supported, only B3/S23")]
    UnsupportedRule(String),
    #[error("run length on row {row} does not fit into 64 bits")]
    InvalidNumber { row: i64 },
    #[error("unexpected symbol `{symbol}` on row {row}")]
    UnexpectedSymbol { symbol: char, row: i64 },
    #[error("cell ({x}, {y}) lies outside the declared {width}x{height} pattern")]
    ExceedsHeader {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}

/// Parses the `x = <width>, y = <height>[, rule = <rule>]` line.
fn parse_header(line: &str) -> Result<(i64, i64), ParseRleError> {
    let (mut width, mut height) = (None, None);
    for field in line.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| ParseRleError::InvalidHeader(field.trim().to_string()))?;
        let (key, value) = (key.trim(), value.trim());
        let invalid = || ParseRleError::InvalidHeader(field.trim().to_string());
        match key {
            "x" => width = Some(value.parse::<u32>().map_err(|_| invalid())?),
            "y" => height = Some(value.parse::<u32>().map_err(|_| invalid())?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(ParseRleError::UnsupportedRule(value.to_string()));
                }
            }
            _ => return Err(invalid()),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((i64::from(w), i64::from(h))),
        _ => Err(ParseRleError::MissingHeader),
    }
}

/// Parses a pattern in RLE format, placing its top left corner at the origin.
///
/// Lines starting with `#` are comments. Only two-state `b`/`o` patterns are accepted.
pub fn parse_rle(data: &str) -> Result<SparseGrid, ParseRleError> {
    let mut lines = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().ok_or(ParseRleError::MissingHeader)?;
    if !header.starts_with('x') {
        return Err(ParseRleError::MissingHeader);
    }
    let (width, height) = parse_header(header)?;

    let exceeds = |x, y| ParseRleError::ExceedsHeader {
        x,
        y,
        width,
        height,
    };

    // the cursor never leaves the declared box, so `width - x` and `height - y` stay non-negative
    let mut cells = Vec::new();
    let (mut x, mut y) = (0i64, 0i64);
    let mut run: Option<i64> = None;
    'pattern: for line in lines {
        for symbol in line.chars() {
            match symbol {
                '0'..='9' => {
                    let digit = i64::from(symbol as u8 - b'0');
                    let value = run
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(ParseRleError::InvalidNumber { row: y })?;
                    run = Some(value);
                }
                'b' => {
                    let count = run.take().unwrap_or(1);
                    if count > width - x {
                        return Err(exceeds(x.saturating_add(count), y));
                    }
                    x += count;
                }
                'o' => {
                    let count = run.take().unwrap_or(1);
                    if y >= height || count > width - x {
                        return Err(exceeds(x.saturating_add(count.saturating_sub(1)), y));
                    }
                    cells.extend((x..x + count).map(|cx| Coord::new(cx, y)));
                    x += count;
                }
                '$' => {
                    let count = run.take().unwrap_or(1);
                    if count > height - y {
                        return Err(exceeds(0, y.saturating_add(count)));
                    }
                    y += count;
                    x = 0;
                }
                '!' => break 'pattern,
                c if c.is_whitespace() => {}
                other => {
                    return Err(ParseRleError::UnexpectedSymbol {
                        symbol: other,
                        row: y,
                    })
                }
            }
        }
    }
    Ok(cells.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider() {
        let grid =
            parse_rle("#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!").unwrap();
        assert_eq!(
            grid,
            SparseGrid::from_cells(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
        );
    }

    #[test]
    fn multi_line_body_and_blank_rows() {
        let grid = parse_rle("x = 4, y = 4\n2o2b$\n2$\n3bo!").unwrap();
        assert_eq!(grid, SparseGrid::from_cells(&[(0, 0), (1, 0), (3, 3)]));
    }

    #[test]
    fn stops_at_bang() {
        let grid = parse_rle("x = 1, y = 1\no! this is ignored").unwrap();
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn errors() {
        assert_eq!(parse_rle(""), Err(ParseRleError::MissingHeader));
        assert_eq!(parse_rle("#C only\nbo!"), Err(ParseRleError::MissingHeader));
        assert_eq!(
            parse_rle("x = 3, y = 3, rule = B36/S23\n3o!"),
            Err(ParseRleError::UnsupportedRule("B36/S23".to_string()))
        );
        assert_eq!(
            parse_rle("x = three, y = 3\n3o!"),
            Err(ParseRleError::InvalidHeader("x = three".to_string()))
        );
        assert_eq!(
            parse_rle("x = 3, y = 1\nbAo!"),
            Err(ParseRleError::UnexpectedSymbol { symbol: 'A', row: 0 })
        );
        assert!(matches!(
            parse_rle("x = 2, y = 1\n3o!"),
            Err(ParseRleError::ExceedsHeader { .. })
        ));
        assert!(matches!(
            parse_rle("x = 1, y = 1\n99999999999999999999o!"),
            Err(ParseRleError::InvalidNumber { row: 0 })
        ));
    }

    #[test]
    fn huge_runs_are_rejected() {
        assert!(matches!(
            parse_rle("x = 3, y = 1\n9223372036854775807bo!"),
            Err(ParseRleError::ExceedsHeader { .. })
        ));
        assert!(matches!(
            parse_rle("x = 3, y = 1\n9223372036854775807$9223372036854775807$o!"),
            Err(ParseRleError::ExceedsHeader { .. })
        ));
        assert!(matches!(
            parse_rle("x = 3, y = 1\nb9223372036854775807o!"),
            Err(ParseRleError::ExceedsHeader { .. })
        ));
        assert!(matches!(
            parse_rle("x = 3, y = 2\n4b!"),
            Err(ParseRleError::ExceedsHeader { x: 4, y: 0, .. })
        ));
    }

    #[test]
    fn runs_may_reach_the_declared_edge() {
        let grid = parse_rle("x = 3, y = 2\n3b$2bo$!").unwrap();
        assert_eq!(grid, SparseGrid::from_cells(&[(2, 1)]));
    }
}
