/// The click counter shown in the label.
///
/// Starts at zero and only ever grows by one per [`Counter::increment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Adds one to the counter and returns the new value.
    ///
    /// Saturates at [`u64::MAX`], so the counter never wraps back to zero.
    pub fn increment(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Decimal text displayed by the label.
    #[must_use]
    pub fn label(&self) -> String {
        self.value.to_string()
    }
}
