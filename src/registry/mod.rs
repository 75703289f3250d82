//! Registry of live render children.
//!
//! Every mounted input field owns one entry here, addressed by a [`Uid`].
//! Uids increase monotonically and are never reused, so a stale uid always
//! misses instead of reaching a newer entry. Unregistering an absent uid
//! is a no-op.

use serde_yaml::Value;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use crate::bind::{BindTarget, FileRef};
use crate::fields::ValueEquality;
use crate::parser::InputFieldDeclaration;
use crate::sync::Mailbox;

/// Identifier of a registered render child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid(u64);

impl Uid {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an entry's binding stands.
#[derive(Debug, Clone, PartialEq)]
pub enum BindState {
    /// The declaration is not bound.
    Unbound,
    /// Bound, but the target could not be resolved yet.
    Unresolved { reason: String },
    Resolved(BindTarget),
}

impl BindState {
    pub fn target(&self) -> Option<&BindTarget> {
        match self {
            BindState::Resolved(target) => Some(target),
            _ => None,
        }
    }
}

/// One live input field.
#[derive(Debug, Clone)]
pub struct RenderChildEntry {
    pub declaration: InputFieldDeclaration,
    /// Document the declaration appears in.
    pub context_file: FileRef,
    pub bind: BindState,
    /// Equality rule of the entry's control.
    pub equality: ValueEquality,
    /// Value posted when the bound field is absent.
    pub default: Value,
    /// Last value posted to, or written by, this entry.
    pub last_known: Option<Value>,
    /// Values this entry wrote whose echo has not arrived yet, oldest first.
    pub unechoed_writes: VecDeque<Value>,
    pub mailbox: Mailbox<Value>,
}

impl RenderChildEntry {
    pub fn new(
        declaration: InputFieldDeclaration,
        context_file: FileRef,
        equality: ValueEquality,
        default: Value,
    ) -> Self {
        let bind = if declaration.is_bound {
            BindState::Unresolved {
                reason: "not resolved yet".to_string(),
            }
        } else {
            BindState::Unbound
        };
        Self {
            declaration,
            context_file,
            bind,
            equality,
            default,
            last_known: None,
            unechoed_writes: VecDeque::new(),
            mailbox: Mailbox::new(),
        }
    }

    pub fn target(&self) -> Option<&BindTarget> {
        self.bind.target()
    }
}

/// Arena of render children keyed by uid.
#[derive(Debug, Default)]
pub struct RenderChildRegistry {
    entries: BTreeMap<Uid, RenderChildEntry>,
    next: u64,
}

impl RenderChildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: RenderChildEntry) -> Uid {
        self.next += 1;
        let uid = Uid(self.next);
        tracing::debug!("Registered render child {} in {}", uid, entry.context_file);
        self.entries.insert(uid, entry);
        uid
    }

    /// Remove an entry. Returns it if it was present.
    pub fn unregister(&mut self, uid: Uid) -> Option<RenderChildEntry> {
        let removed = self.entries.remove(&uid);
        if removed.is_some() {
            tracing::debug!("Unregistered render child {}", uid);
        }
        removed
    }

    pub fn get(&self, uid: Uid) -> Option<&RenderChildEntry> {
        self.entries.get(&uid)
    }

    pub fn get_mut(&mut self, uid: Uid) -> Option<&mut RenderChildEntry> {
        self.entries.get_mut(&uid)
    }

    pub fn contains(&self, uid: Uid) -> bool {
        self.entries.contains_key(&uid)
    }

    /// Uids of every entry matching `predicate`, in registration order.
    pub fn find(&self, predicate: impl Fn(&RenderChildEntry) -> bool) -> Vec<Uid> {
        self.entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(uid, _)| *uid)
            .collect()
    }

    /// Snapshot of every registered uid.
    pub fn uids(&self) -> Vec<Uid> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
