use crate::{AutomatonError, Result};

fn malformed(what: impl std::fmt::Display) -> AutomatonError {
    AutomatonError::InvalidSeedPattern(format!("RLE: {}", what))
}

fn parse_number(data: &[u8], i: &mut usize) -> Result<usize> {
    let mut j = *i;
    while j < data.len() && data[j].is_ascii_digit() {
        j += 1;
    }
    let ans = std::str::from_utf8(&data[*i..j])
        .map_err(malformed)?
        .parse::<usize>()
        .map_err(malformed)?;
    *i = j;
    Ok(ans)
}

/// Declared `[height, width]` and the offset of the first line after the header.
fn parse_header(data: &[u8]) -> Result<([usize; 2], usize)> {
    let mut i = 0;
    // skipping comment lines and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    if i >= data.len() || data[i] != b'x' {
        return Err(malformed("missing `x = .., y = ..` header"));
    }
    // the first two numbers are width and height, the rest of the line is ignored
    let mut dims = [0; 2];
    for dim in dims.iter_mut().rev() {
        while i < data.len() && !data[i].is_ascii_digit() && data[i] != b'\n' {
            i += 1;
        }
        if i >= data.len() || data[i] == b'\n' {
            return Err(malformed("incomplete header"));
        }
        *dim = parse_number(data, &mut i)?;
    }
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }
    Ok((dims, i))
}

/// Size `[height, width]` declared by the header of an RLE pattern, without
/// decoding its cells.
pub fn rle_dims(data: &[u8]) -> Result<[usize; 2]> {
    parse_header(data).map(|(dims, _)| dims)
}

/// Returns `[height, width]` and the row-major cell states of an RLE pattern.
///
/// Two-state patterns use `b`/`o`; multi-state patterns use `.` for 0 and
/// `A`, `B`, `C`, ... for 1, 2, 3, ...
pub fn parse_rle(data: &[u8]) -> Result<([usize; 2], Vec<u8>)> {
    let (dims, mut i) = parse_header(data)?;
    let [height, width] = dims;
    let size = height
        .checked_mul(width)
        .ok_or_else(|| malformed(format!("declared size {}x{} overflows", width, height)))?;

    let mut cells = vec![0; size];
    let (mut x, mut y, mut cnt): (usize, usize, usize) = (0, 0, 1);
    let mut terminated = false;
    while i < data.len() {
        let state = match data[i] {
            c if c.is_ascii_whitespace() => {
                i += 1;
                continue;
            }
            b'0'..=b'9' => {
                cnt = parse_number(data, &mut i)?;
                continue;
            }
            b'$' => {
                (x, y, i, cnt) = (0, y.saturating_add(cnt), i + 1, 1);
                continue;
            }
            b'!' => {
                terminated = true;
                break;
            }
            b'b' | b'.' => 0,
            b'o' => 1,
            c @ b'A'..=b'X' => c - b'A' + 1,
            c => return Err(malformed(format!("unexpected symbol {:?}", c as char))),
        };
        if cnt > width - x || y >= height {
            return Err(malformed(format!(
                "run at ({}, {}) exceeds declared size {}x{}",
                x, y, width, height
            )));
        }
        if state != 0 {
            cells[y * width + x..y * width + x + cnt].fill(state);
        }
        (x, i, cnt) = (x + cnt, i + 1, 1);
    }
    if !terminated {
        return Err(malformed("missing `!` terminator"));
    }
    Ok((dims, cells))
}

#[cfg(test)]
mod tests {
    use super::{parse_rle, rle_dims};
    use crate::AutomatonError;

    #[test]
    fn test_glider() {
        let data = b"#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let (dims, cells) = parse_rle(data).unwrap();
        assert_eq!(dims, [3, 3]);
        assert_eq!(cells, vec![0, 1, 0, 0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_multistate() {
        let data = b"x = 5, y = 2, rule = WireWorld\n.CBA.$2.A!";
        let (dims, cells) = parse_rle(data).unwrap();
        assert_eq!(dims, [2, 5]);
        assert_eq!(cells, vec![0, 3, 2, 1, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_trailing_rows_and_blank_runs() {
        let (dims, cells) = parse_rle(b"x = 2, y = 3\no2$bo!").unwrap();
        assert_eq!(dims, [3, 2]);
        assert_eq!(cells, vec![1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(matches!(
            parse_rle(b"x = 2, y = 1\n3o!"),
            Err(AutomatonError::InvalidSeedPattern(_))
        ));
        assert!(parse_rle(b"x = 2, y = 1\no$o!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\noo").is_err());
        assert!(parse_rle(b"bo!").is_err());
        assert!(parse_rle(b"x = 2, y = 1\noz!").is_err());
    }

    #[test]
    fn test_rejects_oversized_header() {
        assert!(matches!(
            parse_rle(b"x = 4294967296, y = 4294967297\no!"),
            Err(AutomatonError::InvalidSeedPattern(_))
        ));
        let huge = format!("x = {}, y = 2\no!", usize::MAX);
        assert!(parse_rle(huge.as_bytes()).is_err());
        assert_eq!(
            rle_dims(b"x = 4294967296, y = 4294967297\no!"),
            Ok([4294967297, 4294967296])
        );
    }

    #[test]
    fn test_rejects_huge_runs() {
        assert!(parse_rle(b"x = 2, y = 1\no18446744073709551615o!").is_err());
        assert!(parse_rle(b"x = 2, y = 2\n18446744073709551615$18446744073709551615$o!").is_err());
    }
}
