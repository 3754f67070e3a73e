use serde::{Deserialize, Serialize};

/// Either `Auto` or a definite value.
///
/// Offsets use it to mark slots that absorb free space; stretch and place
/// ratios use it to defer to the container default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoOr<T> {
    #[default]
    Auto,
    Value(T),
}

impl<T: Copy> AutoOr<T> {
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    pub fn value(&self) -> Option<T> {
        match *self {
            Self::Auto => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn value_or(&self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, apply: F) -> AutoOr<U> {
        match self {
            Self::Auto => AutoOr::Auto,
            Self::Value(value) => AutoOr::Value(apply(value)),
        }
    }
}

impl<T> From<T> for AutoOr<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}
