//! Flag parsing for command arguments.
//!
//! Accepts `--name value`, `--name=value` and bare switches. Any other token is
//! positional. Flags may repeat; [`ParsedArgs::values`] returns every occurrence.

use std::str::FromStr;

use super::core::CommandError;

#[derive(Debug, Default)]
pub(crate) struct ParsedArgs<'a> {
    positional: Vec<&'a str>,
    flags: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> ParsedArgs<'a> {
    /// `switches` never take a value, so a following token stays positional.
    pub(crate) fn parse(args: &[&'a str], switches: &[&str]) -> Self {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.iter().copied().peekable();
        while let Some(token) = iter.next() {
            let Some(flag) = token.strip_prefix("--") else {
                parsed.positional.push(token);
                continue;
            };
            if let Some((name, value)) = flag.split_once('=') {
                parsed.flags.push((name, Some(value)));
            } else if switches.contains(&flag) {
                parsed.flags.push((flag, None));
            } else {
                let value = iter.next_if(|next| !next.starts_with("--"));
                parsed.flags.push((flag, value));
            }
        }
        parsed
    }

    pub(crate) fn positional(&self) -> &[&'a str] {
        &self.positional
    }

    pub(crate) fn has(&self, name: &str) -> bool {
        self.flags.iter().any(|(flag, _)| *flag == name)
    }

    /// Last value given for `name`.
    pub(crate) fn value(&self, name: &str) -> Result<Option<&'a str>, CommandError> {
        match self.flags.iter().rev().find(|(flag, _)| *flag == name) {
            None => Ok(None),
            Some((_, Some(value))) => Ok(Some(*value)),
            Some((_, None)) => Err(CommandError::invalid(format!("`--{name}` needs a value"))),
        }
    }

    pub(crate) fn values(&self, name: &str) -> Vec<&'a str> {
        self.flags
            .iter()
            .filter(|(flag, _)| *flag == name)
            .filter_map(|(_, value)| *value)
            .collect()
    }

    pub(crate) fn parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>, CommandError> {
        self.value(name)?
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|_| {
                    CommandError::invalid(format!("invalid value `{raw}` for `--{name}`"))
                })
            })
            .transpose()
    }

    /// Fails on the first flag not listed in `known`.
    pub(crate) fn ensure_known(&self, known: &[&str]) -> Result<(), CommandError> {
        match self.flags.iter().find(|(flag, _)| !known.contains(flag)) {
            Some((flag, _)) => Err(CommandError::invalid(format!("unknown option `--{flag}`"))),
            None => Ok(()),
        }
    }
}

/// Splits comma separated lists such as `photography,music`.
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}
