/// Single-slot holder for a value awaiting delivery.
///
/// Holds at most one value. Storing a new value replaces the old one, so
/// only the most recent request survives; there is never a backlog.
#[derive(Debug)]
pub struct PendingTaskSlot<T> {
    value: Option<T>,
}

impl<T> Default for PendingTaskSlot<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> PendingTaskSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, returning the one it superseded, if any.
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Remove and return the held value.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}
