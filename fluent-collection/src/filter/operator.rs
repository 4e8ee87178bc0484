use crate::common::Value;
use crate::errors::{CollectionError, CollectionResult, ErrorKind};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// Comparison applied by a field predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Strict or loose equality.
    Equals,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    /// Substring of a string field, or member of a sequence or record field.
    Contains,
    /// String field matches a regular expression.
    Matches,
}

impl Operator {
    /// Evaluates `value <operator> compare`.
    ///
    /// Ordering operators use [`Value::loose_cmp`] and reject incomparable
    /// pairs. `Contains` and `Matches` reject field values of the wrong shape.
    /// Only an invalid `Matches` pattern is an error.
    pub fn evaluate(&self, value: &Value, compare: &Value, strict: bool) -> CollectionResult<bool> {
        let result = match self {
            Operator::Equals => value.equals(compare, strict),
            Operator::Less => value.loose_cmp(compare) == Some(Ordering::Less),
            Operator::Greater => value.loose_cmp(compare) == Some(Ordering::Greater),
            Operator::LessOrEqual => matches!(
                value.loose_cmp(compare),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Operator::GreaterOrEqual => matches!(
                value.loose_cmp(compare),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Operator::Contains => contains(value, compare, strict),
            Operator::Matches => match (value.as_str(), compare.as_str()) {
                (Some(text), Some(pattern)) => Regex::new(pattern)?.is_match(text),
                (_, None) => {
                    log::error!("Pattern {} is not a string", compare);
                    return Err(CollectionError::new(
                        &format!("Pattern {} is not a string", compare),
                        ErrorKind::FilterError,
                    ));
                }
                (None, _) => false,
            },
        };
        Ok(result)
    }

    /// Symbol used when rendering a filter.
    pub(crate) fn symbol(&self, strict: bool) -> &'static str {
        match self {
            Operator::Equals if strict => "==",
            Operator::Equals => "~=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::Contains => "contains",
            Operator::Matches => "=~",
        }
    }
}

pub(crate) fn contains(value: &Value, compare: &Value, strict: bool) -> bool {
    match value {
        Value::String(text) => match compare.to_key_string() {
            Ok(needle) => text.contains(needle.as_str()),
            Err(_) => false,
        },
        Value::Array(items) => items.iter().any(|item| item.equals(compare, strict)),
        Value::Record(record) => record.values().any(|item| item.equals(compare, strict)),
        _ => false,
    }
}

impl FromStr for Operator {
    type Err = CollectionError;

    fn from_str(s: &str) -> CollectionResult<Self> {
        match s {
            "=" | "==" => Ok(Operator::Equals),
            "<" => Ok(Operator::Less),
            ">" => Ok(Operator::Greater),
            "<=" => Ok(Operator::LessOrEqual),
            ">=" => Ok(Operator::GreaterOrEqual),
            "contains" => Ok(Operator::Contains),
            "matches" => Ok(Operator::Matches),
            _ => {
                log::error!("Unknown operator {}", s);
                Err(CollectionError::new(
                    &format!("Unknown operator {}", s),
                    ErrorKind::FilterError,
                ))
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Operator::Equals => "=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::Contains => "contains",
            Operator::Matches => "matches",
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, val};

    #[test]
    fn test_parse_operators() {
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::Equals);
        assert_eq!("==".parse::<Operator>().unwrap(), Operator::Equals);
        assert_eq!("<=".parse::<Operator>().unwrap(), Operator::LessOrEqual);
        assert_eq!("contains".parse::<Operator>().unwrap(), Operator::Contains);
        assert_eq!("matches".parse::<Operator>().unwrap(), Operator::Matches);

        let err = "!=".parse::<Operator>().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::FilterError);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for op in [
            Operator::Equals,
            Operator::Less,
            Operator::Greater,
            Operator::LessOrEqual,
            Operator::GreaterOrEqual,
            Operator::Contains,
            Operator::Matches,
        ] {
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_equals_strict_and_loose() {
        let cost = val!(5);
        assert!(!Operator::Equals.evaluate(&cost, &val!("5"), true).unwrap());
        assert!(Operator::Equals.evaluate(&cost, &val!("5"), false).unwrap());
        assert!(Operator::Equals.evaluate(&cost, &val!(5), true).unwrap());
    }

    #[test]
    fn test_ordering_operators() {
        let cost = val!(7.50);
        assert!(Operator::Less.evaluate(&cost, &val!(7.51), true).unwrap());
        assert!(Operator::LessOrEqual.evaluate(&cost, &val!(7.50), true).unwrap());
        assert!(!Operator::Greater.evaluate(&cost, &val!(7.50), true).unwrap());
        assert!(Operator::GreaterOrEqual.evaluate(&cost, &val!(5), true).unwrap());
    }

    #[test]
    fn test_ordering_excludes_incomparable() {
        let record = Value::Record(record! { a: 1 });
        assert!(!Operator::Less.evaluate(&record, &val!(1), true).unwrap());
        assert!(!Operator::GreaterOrEqual.evaluate(&record, &val!(1), true).unwrap());
    }

    #[test]
    fn test_contains() {
        assert!(contains(&val!("Decaf"), &val!("e"), true));
        assert!(!contains(&val!("Black"), &val!("e"), true));
        assert!(contains(&val!("Cost 5"), &val!(5), true));

        let ingredients = val!(vec!["Espresso", "Milk"]);
        assert!(contains(&ingredients, &val!("Milk"), true));
        assert!(!contains(&ingredients, &val!("milk"), true));

        let numbers = val!(vec![1, 2, 3]);
        assert!(!contains(&numbers, &val!("2"), true));
        assert!(contains(&numbers, &val!("2"), false));

        let record = Value::Record(record! { first: "a", second: "b" });
        assert!(contains(&record, &val!("b"), true));

        assert!(!contains(&val!(5), &val!(5), true));
        assert!(!contains(&Value::Null, &val!(5), true));
    }

    #[test]
    fn test_matches() {
        let name = val!("Cappuccino");
        assert!(Operator::Matches.evaluate(&name, &val!("^Capp"), true).unwrap());
        assert!(!Operator::Matches.evaluate(&name, &val!("^Black"), true).unwrap());
        assert!(!Operator::Matches.evaluate(&val!(5), &val!("5"), true).unwrap());

        let err = Operator::Matches.evaluate(&name, &val!("(["), true).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::FilterError);

        let err = Operator::Matches.evaluate(&name, &val!(5), true).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::FilterError);
    }
}
