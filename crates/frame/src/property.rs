use serde::{Deserialize, Serialize};

/// A configuration value that reports whether a write changed it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property<T> {
    value: T,
}

impl<T> Property<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub const fn get(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> Property<T> {
    /// Store `value`, returning `true` only if it differs from the current one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}

impl<T: Copy> Property<T> {
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
