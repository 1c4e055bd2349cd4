//! Validation rule evaluation
//!
//! Rules run after raw flag parsing, against the fully resolved values of a
//! sub-command. The first failing rule wins.

use crate::parser::OptionValue;
use std::collections::HashMap;
use std::fmt;

/// A post-parse constraint over resolved option values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// The option must be set (non-empty string, or `true`)
    Required(String),

    /// The option's value must be one of the allowed choices
    OneOfChoices { option: String, allowed: Vec<String> },

    /// The option must be set when `depends_on` equals `value`
    RequiredIf {
        option: String,
        depends_on: String,
        value: String,
    },

    /// The option may only be set when `depends_on` equals `value`
    ForbiddenUnless {
        option: String,
        depends_on: String,
        value: String,
    },
}

impl ValidationRule {
    pub fn required(option: impl Into<String>) -> Self {
        ValidationRule::Required(option.into())
    }

    pub fn one_of<I, S>(option: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationRule::OneOfChoices {
            option: option.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required_if(
        option: impl Into<String>,
        depends_on: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ValidationRule::RequiredIf {
            option: option.into(),
            depends_on: depends_on.into(),
            value: value.into(),
        }
    }

    pub fn forbidden_unless(
        option: impl Into<String>,
        depends_on: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ValidationRule::ForbiddenUnless {
            option: option.into(),
            depends_on: depends_on.into(),
            value: value.into(),
        }
    }

    /// Every option name this rule reads
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            ValidationRule::Required(option) | ValidationRule::OneOfChoices { option, .. } => {
                vec![option.as_str()]
            }
            ValidationRule::RequiredIf {
                option, depends_on, ..
            }
            | ValidationRule::ForbiddenUnless {
                option, depends_on, ..
            } => vec![option.as_str(), depends_on.as_str()],
        }
    }

    /// Short identifier of the rule kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationRule::Required(_) => "required",
            ValidationRule::OneOfChoices { .. } => "one-of",
            ValidationRule::RequiredIf { .. } => "required-if",
            ValidationRule::ForbiddenUnless { .. } => "forbidden-unless",
        }
    }

    /// Check the rule, returning the failure message if it is violated
    ///
    /// A missing value is treated as unset; registration guarantees that every
    /// referenced option exists.
    pub fn check(&self, values: &HashMap<String, OptionValue>) -> Option<String> {
        let is_set = |name: &str| values.get(name).map_or(false, OptionValue::is_set);
        let equals = |name: &str, expected: &str| {
            values.get(name).map_or(false, |v| v.matches(expected))
        };

        match self {
            ValidationRule::Required(option) => {
                if is_set(option) {
                    None
                } else {
                    Some(format!("flag -{} is required", option))
                }
            }

            ValidationRule::OneOfChoices { option, allowed } => {
                let rendered = values.get(option).map(|v| v.to_string()).unwrap_or_default();
                if allowed.iter().any(|choice| *choice == rendered) {
                    None
                } else {
                    Some(format!(
                        "invalid value \"{}\" for flag -{}: must be one of {}",
                        rendered,
                        option,
                        allowed.join("|")
                    ))
                }
            }

            ValidationRule::RequiredIf {
                option,
                depends_on,
                value,
            } => {
                if equals(depends_on, value) && !is_set(option) {
                    Some(format!(
                        "flag -{} is required when -{}={}",
                        option, depends_on, value
                    ))
                } else {
                    None
                }
            }

            ValidationRule::ForbiddenUnless {
                option,
                depends_on,
                value,
            } => {
                if !equals(depends_on, value) && is_set(option) {
                    Some(format!(
                        "flag -{} may only be used with -{}={}",
                        option, depends_on, value
                    ))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Required(option) => write!(f, "required(-{})", option),
            ValidationRule::OneOfChoices { option, allowed } => {
                write!(f, "one-of(-{}: {})", option, allowed.join("|"))
            }
            ValidationRule::RequiredIf {
                option,
                depends_on,
                value,
            } => write!(f, "required-if(-{} when -{}={})", option, depends_on, value),
            ValidationRule::ForbiddenUnless {
                option,
                depends_on,
                value,
            } => write!(
                f,
                "forbidden-unless(-{} unless -{}={})",
                option, depends_on, value
            ),
        }
    }
}

/// Evaluate rules in order and return the first violation
pub fn first_violation<'a>(
    rules: &'a [ValidationRule],
    values: &HashMap<String, OptionValue>,
) -> Option<(&'a ValidationRule, String)> {
    rules
        .iter()
        .find_map(|rule| rule.check(values).map(|message| (rule, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, OptionValue)]) -> HashMap<String, OptionValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_required() {
        let rule = ValidationRule::required("text");
        assert!(rule.check(&values(&[("text", "hello".into())])).is_none());

        let message = rule.check(&values(&[("text", "".into())])).unwrap();
        assert_eq!(message, "flag -text is required");
    }

    #[test]
    fn test_required_bool_must_be_true() {
        let rule = ValidationRule::required("force");
        assert!(rule.check(&values(&[("force", true.into())])).is_none());
        assert!(rule.check(&values(&[("force", false.into())])).is_some());
    }

    #[test]
    fn test_one_of() {
        let rule = ValidationRule::one_of("metric", ["chars", "words", "lines"]);
        assert!(rule.check(&values(&[("metric", "words".into())])).is_none());

        let message = rule.check(&values(&[("metric", "bogus".into())])).unwrap();
        assert_eq!(
            message,
            "invalid value \"bogus\" for flag -metric: must be one of chars|words|lines"
        );
    }

    #[test]
    fn test_required_if() {
        let rule = ValidationRule::required_if("substring", "metric", "substring");

        let missing = values(&[("metric", "substring".into()), ("substring", "".into())]);
        assert!(rule.check(&missing).is_some());

        let present = values(&[("metric", "substring".into()), ("substring", "l".into())]);
        assert!(rule.check(&present).is_none());

        let other_metric = values(&[("metric", "chars".into()), ("substring", "".into())]);
        assert!(rule.check(&other_metric).is_none());
    }

    #[test]
    fn test_forbidden_unless() {
        let rule = ValidationRule::forbidden_unless("substring", "metric", "substring");

        let forbidden = values(&[("metric", "chars".into()), ("substring", "l".into())]);
        assert_eq!(
            rule.check(&forbidden).unwrap(),
            "flag -substring may only be used with -metric=substring"
        );

        let allowed = values(&[("metric", "substring".into()), ("substring", "l".into())]);
        assert!(rule.check(&allowed).is_none());

        let unset = values(&[("metric", "chars".into()), ("substring", "".into())]);
        assert!(rule.check(&unset).is_none());
    }

    #[test]
    fn test_first_violation_is_fail_fast() {
        let rules = vec![
            ValidationRule::required("text"),
            ValidationRule::one_of("metric", ["chars"]),
        ];
        let vals = values(&[("text", "".into()), ("metric", "bogus".into())]);

        let (rule, _) = first_violation(&rules, &vals).unwrap();
        assert_eq!(rule, &rules[0]);
    }

    #[test]
    fn test_dependencies() {
        let rule = ValidationRule::required_if("substring", "metric", "substring");
        assert_eq!(rule.dependencies(), vec!["substring", "metric"]);
        assert_eq!(ValidationRule::required("text").dependencies(), vec!["text"]);
    }
}
