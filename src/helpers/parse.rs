use std::{fmt, str::FromStr};

use combine::{easy, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::Errors<char, &'a str, usize>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Parses all of `s` with `parser`. Error positions are character offsets into
/// `s`.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
        .map_err(|err| err.map_position(|pos| pos.translate_position(s)))
}

/// Parses every non-blank line of `input` with a fresh parser from
/// `make_parser`, stopping at the first line that fails.
pub fn lines<'a, P, F>(input: &'a str, mut make_parser: F) -> anyhow::Result<Vec<P::Output>>
where
    P: Parser<easy::Stream<&'a str>>,
    F: FnMut() -> P,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            from_str(line.trim_end(), make_parser())
                .map_err(|err| anyhow::anyhow!("line {}: {line:?}: {err}", index + 1))
        })
        .collect()
}

/// An optionally signed decimal integer, e.g. `42`, `+7` or `-3`.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let sign = combine::optional(combine::one_of("+-".chars()));
    let digits = combine::many1::<String, _, _>(combine::parser::char::digit());

    let number = (sign, digits).map(|(sign, digits): (Option<char>, String)| match sign {
        Some(sign) => format!("{sign}{digits}"),
        None => digits,
    });

    combine::from_str(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn parse_integer<T>(s: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        from_str(s, decimal_integer::<T, _>()).ok()
    }

    #[test]
    fn integers() {
        assert_eq!(parse_integer::<u32>("0"), Some(0));
        assert_eq!(parse_integer::<u32>("1518"), Some(1518));
        assert_eq!(parse_integer::<i64>("+7"), Some(7));
        assert_eq!(parse_integer::<i64>("-13"), Some(-13));
    }

    #[test]
    fn bad_integers() {
        assert_eq!(parse_integer::<u32>(""), None);
        assert_eq!(parse_integer::<u32>("-1"), None);
        assert_eq!(parse_integer::<u8>("256"), None);
        assert_eq!(parse_integer::<i32>("+"), None);
        assert_eq!(parse_integer::<i32>("12a"), None);
    }

    #[test]
    fn error_position() {
        let err = from_str("12x", decimal_integer::<u32, _>()).unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn all_lines() {
        let values = lines("+1\n\n-2\n+3  \n", decimal_integer::<i32, _>).unwrap();
        assert_eq!(values, vec![1, -2, 3]);
    }

    #[test]
    fn bad_line_is_reported() {
        let err = lines("+1\n-2\nthree\n", decimal_integer::<i32, _>).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("line 3: \"three\""), "{message}");
    }
}
