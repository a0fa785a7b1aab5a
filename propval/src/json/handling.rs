//! Policy for secrets met while exporting property trees.

use std::fmt;
use std::str::FromStr;

use crate::ValueError;

/// What to emit when a secret is exported to plain JSON.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SecretHandling {
    /// Emit the secret's contents.
    Reveal,
    /// Emit the string `"[secret]"` in place of the contents.
    #[default]
    Redact,
    /// Fail with [`ValueError::SecretRejected`].
    Reject,
}

impl SecretHandling {
    /// Returns the lowercase name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Redact => "redact",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for SecretHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretHandling {
    type Err = ValueError;

    /// Parses a policy name, ignoring ASCII case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim();
        [Self::Reveal, Self::Redact, Self::Reject]
            .into_iter()
            .find(|handling| handling.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValueError::InvalidSecretHandling {
                value: value.to_owned(),
            })
    }
}
