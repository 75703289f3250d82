//! Latest-value-wins delivery slot for one live field.

/// Single-slot mailbox. A new post replaces an unconsumed one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`. Returns true if an unconsumed value was superseded.
    pub fn post(&mut self, value: T) -> bool {
        self.slot.replace(value).is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_post_wins() {
        let mut mailbox = Mailbox::new();
        assert!(!mailbox.post(1));
        assert!(mailbox.post(2));
        assert_eq!(mailbox.peek(), Some(&2));
        assert_eq!(mailbox.take(), Some(2));
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.take(), None);
    }
}
