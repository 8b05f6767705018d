//! Grammar helpers shared by the property crates.

use crate::ParseError;
use cssparser::{ParseError as CssParseError, Parser};

/// Parse the contents of the block or function the parser just entered.
///
/// The whole block must be consumed by `parse`.
///
/// # Errors
/// Returns the error produced by `parse`, or `ParseError::UnexpectedToken` when tokens remain.
pub fn parse_nested<'src, T>(
    input: &mut Parser<'src, '_>,
    parse: impl FnOnce(&mut Parser<'src, '_>) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    input
        .parse_nested_block(|nested| -> Result<T, CssParseError<'src, ParseError>> {
            let value = match parse(nested) {
                Ok(value) => value,
                Err(error) => return Err(nested.new_custom_error(error)),
            };
            nested.expect_exhausted()?;
            Ok(value)
        })
        .map_err(ParseError::from)
}

/// Parse one to four values and expand them to `[top, right, bottom, left]`
/// with the usual box-edge replication rules.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when not even one value could be parsed.
pub fn parse_sides<T: Clone>(
    input: &mut Parser<'_, '_>,
    mut parse_item: impl FnMut(&mut Parser<'_, '_>) -> Result<T, ParseError>,
) -> Result<[T; 4], ParseError> {
    let mut values: Vec<T> = Vec::with_capacity(4);
    values.push(parse_item(input)?);
    while values.len() < 4 {
        match input.try_parse(&mut parse_item) {
            Ok(value) => values.push(value),
            Err(_) => break,
        }
    }
    expand_sides(values).ok_or(ParseError::UnexpectedToken)
}

/// Expand 1-4 values to four sides.
pub fn expand_sides<T: Clone>(values: Vec<T>) -> Option<[T; 4]> {
    let mut iter = values.into_iter();
    let top = iter.next()?;
    let right = iter.next().unwrap_or_else(|| top.clone());
    let bottom = iter.next().unwrap_or_else(|| top.clone());
    let left = iter.next().unwrap_or_else(|| right.clone());
    Some([top, right, bottom, left])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Length, parse_length};
    use cssparser::ParserInput;

    #[test]
    fn two_values_mirror_vertical_and_horizontal() {
        let mut input = ParserInput::new("1px 2px");
        let mut parser = Parser::new(&mut input);
        let sides = parse_sides(&mut parser, parse_length);
        assert_eq!(
            sides,
            Ok([
                Length::px(1.0),
                Length::px(2.0),
                Length::px(1.0),
                Length::px(2.0)
            ])
        );
    }

    #[test]
    fn three_values_reuse_right_for_left() {
        let mut input = ParserInput::new("1px 2px 3px");
        let mut parser = Parser::new(&mut input);
        let sides = parse_sides(&mut parser, parse_length);
        assert_eq!(
            sides,
            Ok([
                Length::px(1.0),
                Length::px(2.0),
                Length::px(3.0),
                Length::px(2.0)
            ])
        );
    }

    #[test]
    fn nested_block_must_be_exhausted() {
        let mut input = ParserInput::new("rect(1px 2px)");
        let mut parser = Parser::new(&mut input);
        let opened = parser
            .expect_function_matching("rect")
            .map_err(ParseError::from);
        assert_eq!(opened, Ok(()));
        let result = parse_nested(&mut parser, parse_length);
        assert_eq!(result, Err(ParseError::UnexpectedToken));
    }
}
