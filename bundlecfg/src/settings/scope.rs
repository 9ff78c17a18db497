//! Setting scopes and their precedence.

use std::fmt;

/// A layer in which a setting may hold a value.
///
/// Variants are declared in precedence order, so `Ord` sorts the
/// highest-precedence scope first.
///
/// # Examples
///
/// ```
/// use bundlecfg::Scope;
///
/// assert!(Scope::Local < Scope::Env);
/// assert!(Scope::Env < Scope::Global);
/// assert!(Scope::Global < Scope::Default);
/// assert!(!Scope::Env.is_writable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Per-project settings file.
    Local,
    /// Process environment.
    Env,
    /// Per-user settings file.
    Global,
    /// Built-in fallback.
    Default,
}

impl Scope {
    /// All scopes, highest precedence first.
    pub const PRECEDENCE: [Self; 4] = [Self::Local, Self::Env, Self::Global, Self::Default];

    /// Whether this component may write to the scope.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Local | Self::Global)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Env => write!(f, "env"),
            Self::Global => write!(f, "global"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// The writable subset of [`Scope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WriteScope {
    /// Per-project settings file.
    Local,
    /// Per-user settings file.
    Global,
}

impl WriteScope {
    /// Both writable scopes, local first.
    pub const BOTH: [Self; 2] = [Self::Local, Self::Global];

    /// Adverb used in conflict messages ("locally" / "globally").
    #[must_use]
    pub const fn adverb(self) -> &'static str {
        match self {
            Self::Local => "locally",
            Self::Global => "globally",
        }
    }
}

impl From<WriteScope> for Scope {
    fn from(scope: WriteScope) -> Self {
        match scope {
            WriteScope::Local => Self::Local,
            WriteScope::Global => Self::Global,
        }
    }
}

impl TryFrom<Scope> for WriteScope {
    type Error = Scope;

    /// Narrows a scope to a writable one, handing back the scope otherwise.
    fn try_from(scope: Scope) -> Result<Self, Self::Error> {
        match scope {
            Scope::Local => Ok(Self::Local),
            Scope::Global => Ok(Self::Global),
            Scope::Env | Scope::Default => Err(scope),
        }
    }
}

impl fmt::Display for WriteScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Scope::from(*self).fmt(f)
    }
}
