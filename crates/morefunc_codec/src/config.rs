//! Configuration for decoding.

/// How decoding treats structure entries with no encoded counterpart.
///
/// An encoded key with no structure entry is always an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyPolicy {
    /// Extra structure entries are ignored.
    #[default]
    Lenient,
    /// Every structure entry must have an encoded counterpart.
    Strict,
}

/// Configuration for a [`Codec`](crate::Codec).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Treatment of structure entries missing from the encoding.
    pub key_policy: KeyPolicy,

    /// Deepest mapping nesting accepted below the top level
    /// (`None` = unbounded).
    pub max_depth: Option<usize>,
}

impl CodecConfig {
    /// Creates a configuration requiring both halves to describe the same keys.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            key_policy: KeyPolicy::Strict,
            ..Self::default()
        }
    }

    /// Builder method to set the key policy.
    #[must_use]
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    /// Builder method to bound nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
