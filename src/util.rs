use nom::{
    character::complete::{digit1, i64 as signed_digits},
    combinator::{all_consuming, map_res},
    IResult,
};

/// An unsigned decimal integer, as used by date segments.
pub fn unsigned(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse)(input)
}

/// A signed decimal integer with an optional `+` or `-`, as used by amounts.
pub fn signed(input: &str) -> IResult<&str, i64> {
    signed_digits(input)
}

/// Runs `parser` over the whole of `input`, discarding the nom error.
pub fn complete<'a, T, F>(input: &'a str, parser: F) -> Option<T>
where
    F: FnMut(&'a str) -> IResult<&'a str, T>,
{
    all_consuming(parser)(input).ok().map(|(_, out)| out)
}

/// Splits at the first `sep`. Without one, everything is the head and the tail
/// is empty.
pub fn split_char(input: &str, sep: char) -> (&str, &str) {
    input.split_once(sep).unwrap_or((input, ""))
}
