// SPDX-License-Identifier: Apache-2.0

//! Hostname validation for values handed to external networking commands.
//!
//! A candidate must never carry shell metacharacters, even though `ping` is
//! spawned without a shell, and must look like a plausible DNS name or IPv4
//! address. Rules are checked in a fixed order and the first failure wins:
//!
//! 1. empty, or longer than [`MAX_HOSTNAME_LEN`] characters
//! 2. contains a shell metacharacter (see [`SHELL_METACHARACTERS`])
//! 3. contains anything outside `[A-Za-z0-9.-]`
//! 4. starts or ends with `.` or `-`
//! 5. contains `..` or `--`

use std::fmt;
use std::ops::Deref;

use thiserror::Error;

/// Maximum accepted hostname length, in characters.
pub const MAX_HOSTNAME_LEN: usize = 253;

/// Characters rejected before the charset check.
pub const SHELL_METACHARACTERS: &[char] = &[
    ';', '&', '|', '`', '$', '(', ')', '<', '>', '\n', '\r', ' ', '\t',
];

/// Reason a hostname candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostnameRejection {
    /// The candidate is the empty string.
    #[error("hostname is empty")]
    Empty,

    /// The candidate exceeds [`MAX_HOSTNAME_LEN`].
    #[error("hostname is {len} characters long (max {max})", max = MAX_HOSTNAME_LEN)]
    TooLong {
        /// Length of the candidate in characters.
        len: usize,
    },

    /// The candidate contains a shell metacharacter.
    #[error("hostname contains shell metacharacter {0:?}")]
    ShellMetacharacter(char),

    /// The candidate contains a character outside `[A-Za-z0-9.-]`.
    #[error("hostname contains disallowed character {0:?}")]
    DisallowedCharacter(char),

    /// The candidate starts or ends with `.` or `-`.
    #[error("hostname starts or ends with a separator")]
    EdgeSeparator,

    /// The candidate contains `..` or `--`.
    #[error("hostname contains repeated separators")]
    RepeatedSeparator,
}

fn is_separator(c: char) -> bool {
    c == '.' || c == '-'
}

/// Checks a candidate and reports the first rule it breaks.
///
/// # Examples
///
/// ```
/// use safeweb_core::hostname::{check_hostname, HostnameRejection};
///
/// assert!(check_hostname("example.com").is_ok());
/// assert_eq!(
///     check_hostname("host;name"),
///     Err(HostnameRejection::ShellMetacharacter(';'))
/// );
/// ```
pub fn check_hostname(candidate: &str) -> Result<(), HostnameRejection> {
    if candidate.is_empty() {
        return Err(HostnameRejection::Empty);
    }
    let len = candidate.chars().count();
    if len > MAX_HOSTNAME_LEN {
        return Err(HostnameRejection::TooLong { len });
    }

    if let Some(c) = candidate.chars().find(|c| SHELL_METACHARACTERS.contains(c)) {
        return Err(HostnameRejection::ShellMetacharacter(c));
    }

    if let Some(c) = candidate
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || is_separator(c)))
    {
        return Err(HostnameRejection::DisallowedCharacter(c));
    }

    if candidate.starts_with(is_separator) || candidate.ends_with(is_separator) {
        return Err(HostnameRejection::EdgeSeparator);
    }

    if candidate.contains("..") || candidate.contains("--") {
        return Err(HostnameRejection::RepeatedSeparator);
    }

    Ok(())
}

/// Returns `true` if `candidate` is safe to pass as a single argument to an
/// external networking command.
///
/// Total and side-effect free: any string, including the empty one, yields a
/// boolean and the same input always yields the same answer.
#[must_use]
pub fn is_valid_hostname(candidate: &str) -> bool {
    check_hostname(candidate).is_ok()
}

/// A hostname that passed [`check_hostname`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Validates `candidate` and wraps it.
    pub fn parse(candidate: &str) -> Result<Self, HostnameRejection> {
        check_hostname(candidate)?;
        Ok(Self(candidate.to_owned()))
    }

    /// Returns the hostname as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Hostname {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
