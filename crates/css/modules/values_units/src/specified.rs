//! The contract shared by every property value: an initial value, an `inherit`
//! state, and the inheritance step performed at the start of `compute`.
//! See <https://www.w3.org/TR/CSS21/cascade.html#value-stages>

/// A property value that can be in the specified `inherit` state.
pub trait Specified: Clone {
    /// The property's initial value. Never `inherit`.
    fn initial() -> Self;

    /// Whether this value is the `inherit` keyword.
    fn is_inherit(&self) -> bool;
}

/// Resolve `inherit` at the start of a `compute` call.
///
/// Copies the parent's computed value verbatim and returns `true` (nothing more to
/// resolve). Without a parent the value becomes the initial value and `false` is
/// returned so the caller still resolves it. Non-inherit values are left alone.
pub fn inherit<T: Specified>(value: &mut T, parent: Option<&T>) -> bool {
    if !value.is_inherit() {
        return false;
    }
    if let Some(parent_value) = parent {
        parent_value.clone_into(value);
        return true;
    }
    *value = T::initial();
    false
}

/// Declare a property whose values are plain keywords.
///
/// Generates the enum (with an extra `Inherit` variant), `parse`, `parse_keyword`,
/// `compute`, `as_str`, `Display` and the `Specified` implementation.
#[macro_export]
macro_rules! keyword_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
        initial = $initial:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            Inherit,
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Parse one keyword, or `inherit`.
            ///
            /// # Errors
            /// Returns `ParseError::UnexpectedToken` for any other token.
            pub fn parse(
                input: &mut $crate::cssparser::Parser<'_, '_>,
            ) -> Result<Self, $crate::ParseError> {
                let ident = input.expect_ident()?;
                if ident.eq_ignore_ascii_case("inherit") {
                    return Ok(Self::Inherit);
                }
                Self::from_keyword(ident).ok_or($crate::ParseError::UnexpectedToken)
            }

            /// Parse one keyword; `inherit` is rejected (shorthand position).
            ///
            /// # Errors
            /// Returns `ParseError::UnexpectedToken` for any other token.
            pub fn parse_keyword(
                input: &mut $crate::cssparser::Parser<'_, '_>,
            ) -> Result<Self, $crate::ParseError> {
                let ident = input.expect_ident()?;
                Self::from_keyword(ident).ok_or($crate::ParseError::UnexpectedToken)
            }

            /// Case-insensitive keyword lookup.
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                $(
                    if keyword.eq_ignore_ascii_case($keyword) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Keyword values only need the inheritance step.
            pub fn compute(&mut self, parent: Option<&Self>) {
                $crate::inherit(self, parent);
            }

            /// The keyword text.
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::Inherit => "inherit",
                    $( Self::$variant => $keyword, )+
                }
            }
        }

        impl $crate::Specified for $name {
            fn initial() -> Self {
                Self::$initial
            }

            fn is_inherit(&self) -> bool {
                matches!(self, Self::Inherit)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::{Parser, ParserInput};

    keyword_property! {
        /// Test-only keyword set.
        pub enum Switch {
            On => "on",
            Off => "off",
        }
        initial = Off;
    }

    fn parse(text: &str) -> Result<Switch, crate::ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        Switch::parse(&mut parser)
    }

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(parse("ON"), Ok(Switch::On));
        assert_eq!(parse("inherit"), Ok(Switch::Inherit));
        assert_eq!(parse("maybe"), Err(crate::ParseError::UnexpectedToken));
    }

    #[test]
    fn inherit_copies_parent_or_falls_back_to_initial() {
        let mut child = Switch::Inherit;
        child.compute(Some(&Switch::On));
        assert_eq!(child, Switch::On);

        let mut root = Switch::Inherit;
        root.compute(None);
        assert_eq!(root, Switch::Off);
    }

    #[test]
    fn explicit_values_ignore_parent() {
        let mut value = Switch::On;
        assert!(!inherit(&mut value, Some(&Switch::Off)));
        assert_eq!(value.to_string(), "on");
    }
}
