/// Characters that open and close a quoted argument
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Split a command line into arguments.
///
/// Spaces separate arguments outside quotes. A quote opens a segment that
/// only the same quote closes; closing always emits an argument, even an
/// empty one, and an unterminated quote runs to the end of the line.
///
/// Escapes: `\ooo` (octal), `\uXXXX` (hex), `\b \f \n \r \s \t \" \' \\`.
/// Any other escape drops the backslash and keeps the following character.
pub fn split_arguments(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut args = Vec::new();
    let mut buf = String::new();
    let mut quote: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];

        if current == '\\' {
            let (decoded, consumed) = decode_escape(&chars[i + 1..]);
            if let Some(c) = decoded {
                buf.push(c);
            }
            i += 1 + consumed;
            continue;
        }

        match quote {
            None if QUOTES.contains(&current) => quote = Some(current),
            Some(open) if open == current => {
                quote = None;
                args.push(std::mem::take(&mut buf));
            }
            None if current == ' ' => {
                if !buf.is_empty() {
                    args.push(std::mem::take(&mut buf));
                }
            }
            _ => buf.push(current),
        }
        i += 1;
    }

    if !buf.is_empty() {
        args.push(buf);
    }
    args
}

/// Decode the escape following a backslash.
/// Returns the decoded character, if any, and how many characters it used.
fn decode_escape(rest: &[char]) -> (Option<char>, usize) {
    if let Some(c) = numeric_escape(rest, 0, 3, 8) {
        return (Some(c), 3);
    }
    if rest.first() == Some(&'u') {
        if let Some(c) = numeric_escape(rest, 1, 4, 16) {
            return (Some(c), 5);
        }
    }

    let simple = match rest.first() {
        Some('b') => '\u{8}',
        Some('f') => '\u{c}',
        Some('n') => '\n',
        Some('r') => '\r',
        Some('s') => ' ',
        Some('t') => '\t',
        Some('"') => '"',
        Some('\'') => '\'',
        Some('\\') => '\\',
        // Unknown escape: drop the backslash only
        _ => return (None, 0),
    };
    (Some(simple), 1)
}

/// Read `digits` characters in `radix` starting at `skip`, and turn them into a char
fn numeric_escape(rest: &[char], skip: usize, digits: usize, radix: u32) -> Option<char> {
    let field = rest.get(skip..skip + digits)?;
    let value = field
        .iter()
        .try_fold(0u32, |acc, c| Some(acc * radix + c.to_digit(radix)?))?;
    char::from_u32(value)
}
