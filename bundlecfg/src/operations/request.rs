//! Turning raw `config` arguments into a request.

use crate::error::{Error, Result};
use crate::settings::key;
use crate::settings::WriteScope;

/// Marker that introduces a scope token.
const SCOPE_MARKER: &str = "--";

/// Scope markers stripped from values.
const STRIPPED_MARKERS: [&str; 2] = ["--global", "--local"];

/// A scope token as typed after `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFlag {
    /// `--local`
    Local,
    /// `--global`
    Global,
    /// `--delete`
    Delete,
}

impl ScopeFlag {
    /// Parse the token that followed `--`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScope`] for anything but `local`, `global`
    /// or `delete`.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "local" => Ok(Self::Local),
            "global" => Ok(Self::Global),
            "delete" => Ok(Self::Delete),
            other => Err(Error::InvalidScope {
                scope: other.to_string(),
            }),
        }
    }
}

/// A new value for a setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    /// Setting name.
    pub name: String,
    /// Scope the value is written to.
    pub scope: WriteScope,
    /// Normalized value (markers stripped, groups colon-joined).
    pub value: String,
    /// Value tokens joined with spaces, before normalization.
    pub raw: String,
}

/// What a `config` invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigRequest {
    /// Print every configured setting with its precedence chain.
    ListAll,
    /// Print one setting's precedence chain.
    Show {
        /// Setting name.
        name: String,
    },
    /// Remove a setting.
    Delete {
        /// Setting name.
        name: String,
        /// Restrict the delete to one scope; `None` clears both.
        scope: Option<WriteScope>,
    },
    /// Set a setting.
    Write(WriteRequest),
}

impl ConfigRequest {
    /// Parse the arguments that followed `config`.
    ///
    /// A leading `--<scope>` token selects the scope and the token after it
    /// is the name. Otherwise the first token is the name and the scope is
    /// local when `prefer_local` is set, global when not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScope`] when a name is given after an unknown
    /// scope marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::operations::{ConfigRequest, WriteRequest};
    /// use bundlecfg::WriteScope;
    ///
    /// let request = ConfigRequest::parse(["--local", "without", "dev", "test"], false).unwrap();
    /// assert_eq!(
    ///     request,
    ///     ConfigRequest::Write(WriteRequest {
    ///         name: "without".to_string(),
    ///         scope: WriteScope::Local,
    ///         value: "dev:test".to_string(),
    ///         raw: "dev test".to_string(),
    ///     })
    /// );
    ///
    /// assert_eq!(ConfigRequest::parse(Vec::<String>::new(), false).unwrap(), ConfigRequest::ListAll);
    /// assert!(ConfigRequest::parse(["--system", "path"], false).is_err());
    /// ```
    pub fn parse<I, S>(args: I, prefer_local: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let peek = args.next();

        let (name, scope_token) = match peek {
            Some(token) if token.starts_with(SCOPE_MARKER) => {
                let scope = token[SCOPE_MARKER.len()..].to_string();
                (args.next(), Some(scope))
            }
            other => (other, None),
        };

        let Some(name) = name else {
            return Ok(Self::ListAll);
        };
        let rest: Vec<String> = args.collect();

        let flag = match scope_token {
            Some(token) => ScopeFlag::parse(&token)?,
            None if prefer_local => ScopeFlag::Local,
            None => ScopeFlag::Global,
        };

        let scope = match flag {
            ScopeFlag::Delete => {
                return Ok(Self::Delete {
                    name,
                    scope: Self::delete_qualifier(&rest),
                });
            }
            ScopeFlag::Local => WriteScope::Local,
            ScopeFlag::Global => WriteScope::Global,
        };

        if rest.is_empty() {
            return Ok(Self::Show { name });
        }

        let raw = rest.join(" ");
        let value = Self::normalize_value(&name, &raw);
        Ok(Self::Write(WriteRequest {
            name,
            scope,
            value,
            raw,
        }))
    }

    /// Strip scope markers and, for group settings, colon-join the groups.
    #[must_use]
    pub fn normalize_value(name: &str, raw: &str) -> String {
        let mut value = raw.to_string();
        for marker in STRIPPED_MARKERS {
            value = value.replace(marker, "");
        }
        let value = value.trim();

        if key::is_group_setting(name) {
            value.split_whitespace().collect::<Vec<_>>().join(":")
        } else {
            value.to_string()
        }
    }

    fn delete_qualifier(rest: &[String]) -> Option<WriteScope> {
        let local = rest.iter().any(|t| t == "--local");
        let global = rest.iter().any(|t| t == "--global");
        match (local, global) {
            (true, false) => Some(WriteScope::Local),
            (false, true) => Some(WriteScope::Global),
            _ => None,
        }
    }
}
