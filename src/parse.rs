use combine::error::ParseError;
use combine::parser::char::{digit, spaces};
use combine::stream::state::State;
use combine::{eof, many, many1, one_of, optional, token, Parser, Stream};
use std::num::ParseIntError;

use super::*;

/// Parses the text of a workload file.
///
/// Whitespace between tokens is optional, the same way a stream extractor
/// reads `k1` as `k 1`.
pub fn parse_workload(text: &str) -> Result<Workload> {
    workload()
        .easy_parse(State::new(text))
        .map(|(w, _rest)| w)
        .map_err(|e| Error::Malformed(e.to_string()))
}

fn workload<I>() -> impl Parser<Input = I, Output = Workload>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
    <I::Error as ParseError<I::Item, I::Range, I::Position>>::StreamError: From<ParseIntError>,
{
    spaces()
        .with(many(parse_query().skip(spaces())))
        .skip(eof())
        .map(Workload::new)
}

fn parse_query<I>() -> impl Parser<Input = I, Output = Query>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
    <I::Error as ParseError<I::Item, I::Range, I::Position>>::StreamError: From<ParseIntError>,
{
    insert().or(distance())
}

fn insert<I>() -> impl Parser<Input = I, Output = Query>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
    <I::Error as ParseError<I::Item, I::Range, I::Position>>::StreamError: From<ParseIntError>,
{
    (token('k').skip(spaces()), parse_index()).map(|(_, key)| Query::Insert(key))
}

fn distance<I>() -> impl Parser<Input = I, Output = Query>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
    <I::Error as ParseError<I::Item, I::Range, I::Position>>::StreamError: From<ParseIntError>,
{
    (
        token('q').skip(spaces()),
        parse_index().skip(spaces()),
        parse_index(),
    )
        .map(|(_, first, second)| Query::Distance(first, second))
}

fn parse_index<I>() -> impl Parser<Input = I, Output = Index>
where
    I: Stream<Item = char>,
    I::Error: ParseError<I::Item, I::Range, I::Position>,
    <I::Error as ParseError<I::Item, I::Range, I::Position>>::StreamError: From<ParseIntError>,
{
    (optional(one_of("+-".chars())), many1(digit())).and_then(
        |(sign, digits): (Option<char>, String)| match sign {
            Some('-') => format!("-{}", digits).parse::<Index>(),
            _ => digits.parse::<Index>(),
        },
    )
}
