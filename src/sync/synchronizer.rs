//! Two-way binding between live fields and metadata.
//!
//! External changes are posted to the mailbox of every entry bound to the
//! changed field. User edits go to the store, and their echoes are not
//! posted back to the writer.

use serde_yaml::Value;

use crate::bind::{resolve_with_policy, AmbiguityPolicy, FileIndex, FileRef};
use crate::error::Result;
use crate::fields::InputControl;
use crate::metadata::{traverse, MetadataStore};
use crate::parser::InputFieldDeclaration;
use crate::registry::{BindState, RenderChildEntry, RenderChildRegistry, Uid};

/// Routes metadata changes to live entries and user edits to the store.
#[derive(Debug, Default)]
pub struct BindingSynchronizer {
    registry: RenderChildRegistry,
    index: FileIndex,
    policy: AmbiguityPolicy,
}

impl BindingSynchronizer {
    pub fn new(index: FileIndex) -> Self {
        Self {
            registry: RenderChildRegistry::new(),
            index,
            policy: AmbiguityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &RenderChildRegistry {
        &self.registry
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    /// Replace the file index. Unresolved targets are retried on the next
    /// change.
    pub fn set_index(&mut self, index: FileIndex) {
        self.index = index;
    }

    /// Register a live field and post its initial value.
    ///
    /// The control supplies the equality rule and the value used when the
    /// bound field is absent. An unresolvable target is logged and the
    /// default is posted; resolution is retried on later changes.
    pub fn attach(
        &mut self,
        declaration: InputFieldDeclaration,
        context_file: &FileRef,
        control: &dyn InputControl,
        store: &dyn MetadataStore,
    ) -> Uid {
        let mut entry = RenderChildEntry::new(
            declaration,
            context_file.clone(),
            control.equality(),
            control.default_value(),
        );
        resolve_entry(&mut entry, &self.index, self.policy);

        let initial = match entry.target() {
            Some(target) => store
                .read(&target.file, &target.field_path)
                .unwrap_or_else(|| entry.default.clone()),
            None => entry.default.clone(),
        };
        entry.last_known = Some(initial.clone());
        entry.mailbox.post(initial);

        self.registry.register(entry)
    }

    /// Unregister a live field. Unknown uids are ignored.
    pub fn detach(&mut self, uid: Uid) {
        self.registry.unregister(uid);
    }

    /// Deliver a new metadata snapshot for `file`.
    ///
    /// Returns the uids that received a new value.
    pub fn on_external_change(&mut self, file: &FileRef, snapshot: &Value) -> Vec<Uid> {
        if !self.index.contains(file) {
            self.index.insert(file.clone());
        }

        let mut updated = Vec::new();
        for uid in self.registry.uids() {
            // The entry may have been detached while we were iterating.
            let Some(entry) = self.registry.get_mut(uid) else {
                continue;
            };
            if matches!(entry.bind, BindState::Unresolved { .. }) {
                resolve_entry(entry, &self.index, self.policy);
            }
            let Some(target) = entry.target() else {
                continue;
            };
            if target.file != *file {
                continue;
            }

            let value = traverse(snapshot, &target.field_path)
                .cloned()
                .unwrap_or_else(|| entry.default.clone());

            let echoed = entry
                .unechoed_writes
                .iter()
                .position(|written| entry.equality.eq(written, &value));
            match echoed {
                Some(pos) => {
                    // Echoes arrive in write order; older writes were coalesced.
                    entry.unechoed_writes.drain(..=pos);
                    tracing::debug!("{}: skipping echo of own write", uid);
                    continue;
                }
                None => entry.unechoed_writes.clear(),
            }
            if entry
                .last_known
                .as_ref()
                .is_some_and(|known| entry.equality.eq(known, &value))
            {
                continue;
            }

            entry.last_known = Some(value.clone());
            if entry.mailbox.post(value) {
                tracing::debug!("{}: superseded an unapplied value", uid);
            }
            updated.push(uid);
        }
        updated
    }

    /// Write a user edit of `uid` to the store.
    ///
    /// A value still waiting in the entry's mailbox is older than the edit
    /// and is discarded. Returns false without writing when the uid is unknown or its target
    /// is not resolved.
    pub fn on_user_edit(
        &mut self,
        uid: Uid,
        value: Value,
        store: &mut dyn MetadataStore,
    ) -> Result<bool> {
        let Some(entry) = self.registry.get_mut(uid) else {
            tracing::debug!("{}: edit for a detached field dropped", uid);
            return Ok(false);
        };
        let Some(target) = entry.target().cloned() else {
            tracing::debug!("{}: edit on an unbound or unresolved field not written", uid);
            return Ok(false);
        };

        store.write(&target.file, &target.field_path, value.clone())?;
        if entry.mailbox.take().is_some() {
            tracing::debug!("{}: pending value superseded by edit", uid);
        }
        entry.unechoed_writes.push_back(value.clone());
        entry.last_known = Some(value);
        Ok(true)
    }

    /// Take the latest value waiting for `uid`.
    pub fn take_pending(&mut self, uid: Uid) -> Option<Value> {
        self.registry.get_mut(uid)?.mailbox.take()
    }
}

fn resolve_entry(entry: &mut RenderChildEntry, index: &FileIndex, policy: AmbiguityPolicy) {
    let Some(raw) = entry.declaration.bind_target.as_deref() else {
        entry.bind = BindState::Unbound;
        return;
    };
    entry.bind = match resolve_with_policy(raw, &entry.context_file, index, policy) {
        Ok(target) => BindState::Resolved(target),
        Err(err) => {
            tracing::warn!("{}: {}", entry.context_file, err);
            BindState::Unresolved {
                reason: err.to_string(),
            }
        }
    };
}
