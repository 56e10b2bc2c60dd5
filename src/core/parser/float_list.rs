use crate::core::base::*;
use crate::core::error::*;

use nom::bytes::complete::{take_till1, take_while};
use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::IResult;

#[inline]
fn is_separator(c: char) -> bool {
    c == ',' || c.is_ascii_whitespace()
}

fn separators(s: &str) -> IResult<&str, &str> {
    take_while(is_separator)(s)
}

fn token(s: &str) -> IResult<&str, &str> {
    preceded(separators, take_till1(is_separator))(s)
}

fn tokens(s: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(terminated(many0(token), separators))(s)
}

fn float_value(s: &str) -> IResult<&str, f64> {
    all_consuming(double)(s)
}

/// Splits `s` on runs of commas and whitespace.
pub fn tokenize<'a>(key: &str, s: &'a str) -> Result<Vec<&'a str>, SpectrumError> {
    match tokens(s) {
        Ok((_, v)) => Ok(v),
        Err(e) => Err(SpectrumError::Parse {
            key: String::from(key),
            token: match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => String::from(e.input),
                nom::Err::Incomplete(_) => String::from(s),
            },
        }),
    }
}

/// Parses a comma and/or whitespace separated list of floats such as
/// `"300, 400, 500"`. `key` names the parameter in error messages.
pub fn parse_float_list(key: &str, s: &str) -> Result<Vec<Float>, SpectrumError> {
    let mut values = Vec::new();
    for t in tokenize(key, s)? {
        match float_value(t) {
            Ok((_, v)) => values.push(v as Float),
            Err(_) => {
                return Err(SpectrumError::Parse {
                    key: String::from(key),
                    token: String::from(t),
                });
            }
        }
    }
    return Ok(values);
}
