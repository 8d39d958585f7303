//! Shared test utilities for domain testing
//!
//! - `TestDataDir`: temporary directory holding the JSON store files
//! - `TestDataBuilder`: deterministic test data generation
//!
//! # Usage
//!
//! ```rust
//! use test_utils::{TestDataBuilder, TestDataDir};
//!
//! let dir = TestDataDir::new();
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let email = builder.email("owner");
//! let barcode = builder.barcode("milk");
//! assert!(dir.users_path().starts_with(dir.path()));
//! ```

mod data_dir;

pub use data_dir::TestDataDir;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_scan_twice");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        Self::new(hash_of(name))
    }

    /// Generate a lowercase email address unique to this test
    pub fn email(&self, label: &str) -> String {
        format!("test-{}-{}@example.com", label, self.seed)
    }

    /// Generate a 13 digit, EAN-shaped barcode unique to this test and label
    pub fn barcode(&self, label: &str) -> String {
        let mixed = hash_of(&format!("{}:{}", self.seed, label));
        format!("{:013}", mixed % 10_000_000_000_000)
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

fn hash_of(value: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.email("a"), builder2.email("a"));
        assert_eq!(builder1.barcode("milk"), builder2.barcode("milk"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.email("a"), builder2.email("a"));
    }

    #[test]
    fn test_barcode_shape() {
        let builder = TestDataBuilder::from_test_name("barcode_shape");
        let barcode = builder.barcode("milk");

        assert_eq!(barcode.len(), 13);
        assert!(barcode.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(barcode, builder.barcode("bread"));
    }

    #[test]
    fn test_data_dir_paths() {
        let dir = TestDataDir::new();

        assert!(dir.users_path().starts_with(dir.path()));
        assert!(dir.codes_path().ends_with("codes.json"));

        dir.write_codes("[]");
        assert_eq!(dir.read_codes(), "[]");
    }
}
