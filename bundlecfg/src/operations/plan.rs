//! Plan types for settings operations.
//!
//! A plan describes the store mutations and user-facing notices an
//! operation will produce, without performing them.

use std::fmt;

use crate::output::UiLevel;
use crate::settings::WriteScope;

/// A single store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Write a value in one scope.
    Set {
        /// Target scope.
        scope: WriteScope,
        /// Setting name.
        name: String,
        /// New value.
        value: String,
    },

    /// Remove a value from one scope.
    Unset {
        /// Target scope.
        scope: WriteScope,
        /// Setting name.
        name: String,
    },
}

impl PlanAction {
    /// Write `value` to `name` in `scope`.
    #[must_use]
    pub fn set(scope: WriteScope, name: &str, value: impl Into<String>) -> Self {
        Self::Set {
            scope,
            name: name.to_string(),
            value: value.into(),
        }
    }

    /// Remove `name` from `scope`.
    #[must_use]
    pub fn unset(scope: WriteScope, name: &str) -> Self {
        Self::Unset {
            scope,
            name: name.to_string(),
        }
    }

    /// Remove `name` from both writable scopes, local first.
    #[must_use]
    pub fn unset_everywhere(name: &str) -> Vec<Self> {
        WriteScope::BOTH
            .into_iter()
            .map(|scope| Self::unset(scope, name))
            .collect()
    }

    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Set { scope, name, value } => format!("Set {scope} {name} to {value:?}"),
            Self::Unset { scope, name } => format!("Unset {scope} {name}"),
        }
    }
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A line the user should see when the plan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Output level.
    pub level: UiLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: UiLevel::Info,
            message: message.into(),
        }
    }

    /// Warning notice.
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: UiLevel::Warn,
            message: message.into(),
        }
    }
}

/// A complete operation plan: notices first, then actions in order.
#[derive(Debug, Clone, Default)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Lines to show the user.
    pub notices: Vec<Notice>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlecfg::operations::{OperationPlan, PlanAction};
    /// use bundlecfg::WriteScope;
    ///
    /// let plan = OperationPlan::new("Set global path")
    ///     .add_action(PlanAction::set(WriteScope::Global, "path", "/opt/gems"));
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a notice to the plan.
    #[must_use]
    pub fn add_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    /// Appends actions and notices from a conflict repair.
    pub fn extend(&mut self, actions: Vec<PlanAction>, notices: Vec<Notice>) {
        self.actions.extend(actions);
        self.notices.extend(notices);
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
