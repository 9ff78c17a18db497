//! Conflict detection and repair between related settings.
//!
//! Two rule families are checked against the pre-write [`Snapshot`]:
//!
//! - `path`, `system` and `path.system` are mutually exclusive install
//!   strategies. Setting one unsets the other.
//! - The `with` and `without` group sets must not share a group.
//!
//! The resolver never touches the store. It returns a [`Resolution`] holding
//! the repair actions and notices, and a [`ConflictVerdict`] telling the
//! caller whether the pending write may still go ahead.

use crate::settings::key::{self, PATH, PATH_SYSTEM, SYSTEM};
use crate::settings::{GroupSet, Snapshot, WriteScope};

use super::plan::{Notice, PlanAction};

/// Outcome of a conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictVerdict {
    /// Nothing contradicts the pending write.
    NoConflict,
    /// A contradiction was repaired; the pending write proceeds.
    RepairedProceed,
    /// A contradiction was repaired; the pending write must not happen.
    RepairedAbort,
}

/// Verdict plus the repair it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// What the caller should do with the pending write.
    pub verdict: ConflictVerdict,
    /// Store mutations that restore consistency.
    pub actions: Vec<PlanAction>,
    /// Lines explaining the repair.
    pub notices: Vec<Notice>,
}

impl Resolution {
    fn no_conflict() -> Self {
        Self {
            verdict: ConflictVerdict::NoConflict,
            actions: Vec::new(),
            notices: Vec::new(),
        }
    }

    fn repaired(verdict: ConflictVerdict, notice: Notice, actions: Vec<PlanAction>) -> Self {
        Self {
            verdict,
            actions,
            notices: vec![notice],
        }
    }

    /// Whether the pending write must be cancelled.
    #[must_use]
    pub fn blocks_write(&self) -> bool {
        self.verdict == ConflictVerdict::RepairedAbort
    }
}

/// Decides which existing settings contradict a pending write.
///
/// # Examples
///
/// ```
/// use bundlecfg::operations::{ConflictResolver, ConflictVerdict};
/// use bundlecfg::{Locations, Snapshot};
///
/// let snapshot = Snapshot::from_entries([(
///     "path",
///     Locations { global: Some("/opt/gems".to_string()), ..Locations::default() },
/// )]);
///
/// let resolution = ConflictResolver::new(&snapshot).resolve_system_path("system", "true");
/// assert_eq!(resolution.verdict, ConflictVerdict::RepairedProceed);
/// assert_eq!(resolution.actions.len(), 2);
/// ```
pub struct ConflictResolver<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> ConflictResolver<'a> {
    /// Creates a resolver reading from `snapshot`.
    #[must_use]
    pub const fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Check the `path` / `system` / `path.system` exclusivity rules.
    ///
    /// Rules are tried in order and the first match wins:
    ///
    /// 1. `system = true` while `path` is set: unset `path`, proceed.
    /// 2. `path` while `system` is set: unset `system`, proceed.
    /// 3. `path.system = true` while `path` is set: unset `path`, abort.
    /// 4. `path` while `path.system` is set: unset `path.system`, abort.
    ///
    /// "Set" means any configured value in the local, env or global scope.
    #[must_use]
    pub fn resolve_system_path(&self, name: &str, value: &str) -> Resolution {
        let is_true = value == "true";

        let (cleared, verdict) = if name == SYSTEM && is_true && self.snapshot.is_set(PATH) {
            (PATH, ConflictVerdict::RepairedProceed)
        } else if name == PATH && self.snapshot.is_set(SYSTEM) {
            (SYSTEM, ConflictVerdict::RepairedProceed)
        } else if name == PATH_SYSTEM && is_true && self.snapshot.is_set(PATH) {
            (PATH, ConflictVerdict::RepairedAbort)
        } else if name == PATH && self.snapshot.is_set(PATH_SYSTEM) {
            (PATH_SYSTEM, ConflictVerdict::RepairedAbort)
        } else {
            return Resolution::no_conflict();
        };

        log::debug!("{name} conflicts with {cleared}: {verdict:?}");
        Resolution::repaired(
            verdict,
            Notice::warn(format!(
                "`{cleared}` is already configured, so it will be unset."
            )),
            PlanAction::unset_everywhere(cleared),
        )
    }

    /// Check that the new `with`/`without` groups do not overlap the
    /// opposite setting.
    ///
    /// The local scope is checked before the global one and the first
    /// overlap is reported. The repair only ever rewrites the *local*
    /// opposite setting: its groups minus the new ones, or nothing at all
    /// if no group is left.
    #[must_use]
    pub fn resolve_groups(&self, name: &str, value: &str) -> Resolution {
        let Some(opposite) = key::opposite_group_setting(name) else {
            return Resolution::no_conflict();
        };

        let groups = GroupSet::decode(value);
        let existing = self.snapshot.locations(opposite);

        let conflict = WriteScope::BOTH.into_iter().find_map(|scope| {
            let overlap = groups.intersection(&GroupSet::decode_opt(existing.written(scope)));
            (!overlap.is_empty()).then_some((scope, overlap))
        });
        let Some((found_in, overlap)) = conflict else {
            return Resolution::no_conflict();
        };

        log::debug!("{name} overlaps {found_in} {opposite} on {overlap}");
        let notice = Notice::info(format!(
            "`with` and `without` settings cannot share groups. You have already set \
             `{opposite} {overlap}` {}, so it will be unset.",
            found_in.adverb()
        ));

        let mut actions = Vec::new();
        if let Some(local) = existing.local.as_deref() {
            let remainder = GroupSet::decode(local).difference(&groups);
            actions.push(if remainder.is_empty() {
                PlanAction::unset(WriteScope::Local, opposite)
            } else {
                PlanAction::set(WriteScope::Local, opposite, remainder.encode())
            });
        }

        Resolution::repaired(ConflictVerdict::RepairedProceed, notice, actions)
    }
}
