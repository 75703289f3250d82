//! Two-way synchronization between live input fields and the metadata store.
//!
//! Store changes flow in through [`BindingSynchronizer::on_external_change`]
//! and land in each affected entry's single-slot [`Mailbox`]; the render
//! layer drains them with [`BindingSynchronizer::take_pending`]. User edits
//! flow out through [`BindingSynchronizer::on_user_edit`], which writes the
//! store and remembers the value so its echo is not applied again.

pub mod mailbox;
pub mod synchronizer;

pub use mailbox::Mailbox;
pub use synchronizer::BindingSynchronizer;
