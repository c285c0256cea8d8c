use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Fully qualified domain name.
///
/// Labels are stored left to right as written (`www`, `example`, `com`); the
/// root name has no labels and renders as `.`. Label case is kept exactly as
/// received and comparisons are exact, so `Example.com.` and `example.com.`
/// are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Arc<[Arc<str>]>,
}

impl DomainName {
    pub fn root() -> Self {
        Self {
            labels: Arc::from(Vec::<Arc<str>>::new()),
        }
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.as_ref())
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Name with the leftmost label removed. `None` for the root.
    pub fn parent(&self) -> Option<DomainName> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            labels: Arc::from(&self.labels[1..]),
        })
    }

    /// Ancestors from the immediate parent up to and including the root.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }
}

pub struct Ancestors {
    next: Option<DomainName>,
}

impl Iterator for Ancestors {
    type Item = DomainName;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Ok(Self::root());
        }

        let without_dot = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if without_dot.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        let mut labels = Vec::new();
        for label in without_dot.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is longer than {} characters",
                    label, MAX_LABEL_LEN
                )));
            }
            if label.chars().any(char::is_whitespace) {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' contains whitespace",
                    label
                )));
            }
            labels.push(Arc::from(label));
        }

        Ok(Self {
            labels: Arc::from(labels),
        })
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.labels.iter() {
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}
