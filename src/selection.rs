//! Permission scope selection so the list view and the panel footer agree on one set.

use std::collections::BTreeSet;

use tracing::debug;

/// Set of scope identifiers the user has checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSelection {
    scopes: BTreeSet<String>,
}

impl ScopeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn insert(&mut self, scope: impl Into<String>) -> bool {
        self.scopes.insert(scope.into())
    }

    pub fn remove(&mut self, scope: &str) -> bool {
        self.scopes.remove(scope)
    }

    pub fn clear(&mut self) {
        self.scopes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Human-readable footer summary of the selection.
    #[must_use]
    pub fn details(&self) -> String {
        let mut scopes = self.iter();
        match (self.len(), scopes.next()) {
            (0, _) | (_, None) => String::new(),
            (1, Some(scope)) => format!("1 selected: {scope}"),
            (count, Some(_)) => format!("{count} selected"),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for ScopeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{{{}}}", joined.join(", "))
    }
}

/// Permission listing hosted inside the side panel.
///
/// Owns the checked set and reports the whole set (never a delta) through the
/// callback each time it changes.
pub struct PermissionsList<F>
where
    F: FnMut(&ScopeSelection),
{
    scopes: Vec<String>,
    panel: bool,
    checked: ScopeSelection,
    on_change: F,
}

impl<F> PermissionsList<F>
where
    F: FnMut(&ScopeSelection),
{
    pub fn new(scopes: Vec<String>, panel: bool, on_change: F) -> Self {
        Self {
            scopes,
            panel,
            checked: ScopeSelection::new(),
            on_change,
        }
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Whether the list is rendered inside the side panel.
    pub fn is_panel(&self) -> bool {
        self.panel
    }

    pub fn checked(&self) -> &ScopeSelection {
        &self.checked
    }

    pub fn is_checked(&self, scope: &str) -> bool {
        self.checked.contains(scope)
    }

    /// Flip one scope. Unlisted scopes are ignored.
    pub fn toggle(&mut self, scope: &str) -> bool {
        if !self.scopes.iter().any(|listed| listed == scope) {
            debug!(scope, "ignoring toggle for unlisted scope");
            return false;
        }
        if !self.checked.remove(scope) {
            self.checked.insert(scope);
        }
        self.report();
        true
    }

    pub fn set_checked(&mut self, scope: &str, checked: bool) -> bool {
        if self.is_checked(scope) == checked {
            return false;
        }
        self.toggle(scope)
    }

    /// Drop every check, e.g. when the hosting panel reopens.
    pub fn reset(&mut self) {
        if self.checked.is_empty() {
            return;
        }
        self.checked.clear();
        self.report();
    }

    fn report(&mut self) {
        (self.on_change)(&self.checked);
    }
}
