//! Label hashing.
//!
//! Menu entries are classified by 32-bit hashes of their labels. The
//! resolvers only compare hashes, so any stable hash works as long as the
//! same [`LabelHasher`] builds both the entry classifications and the
//! [`KnownLabels`](crate::menu::KnownLabels) table they are matched against.

/// A stable 32-bit hash over menu labels.
pub trait LabelHasher {
    fn hash(&self, label: &str) -> u32;
}

/// The djb2 string hash: seeded with 5381, `h = h * 33 + byte` per byte.
///
/// This is the hash the menu label tables have always been keyed by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djb2;

impl Djb2 {
    /// Hash a label at compile time.
    pub const fn hash_const(label: &str) -> u32 {
        let bytes = label.as_bytes();
        let mut hash: u32 = 5381;
        let mut i = 0;
        while i < bytes.len() {
            hash = hash.wrapping_mul(33).wrapping_add(bytes[i] as u32);
            i += 1;
        }
        hash
    }
}

impl LabelHasher for Djb2 {
    fn hash(&self, label: &str) -> u32 {
        Self::hash_const(label)
    }
}

impl<F> LabelHasher for F
where
    F: Fn(&str) -> u32,
{
    fn hash(&self, label: &str) -> u32 {
        self(label)
    }
}
