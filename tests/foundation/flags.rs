//! Integration tests for flag sets
//!
//! Tests the generated operators and debug output.

use proptest::prelude::*;

quarry_foundation::flag_set! {
    /// Test flags.
    pub struct Access: u8 {
        /// Nothing.
        const NONE = 0;
        /// Read.
        const READ = 1 << 0;
        /// Write.
        const WRITE = 1 << 1;
        /// Execute.
        const EXECUTE = 1 << 2;
    }
}

#[test]
fn operators() {
    let rw = Access::READ | Access::WRITE;
    assert!(rw.contains(Access::READ));
    assert!(!rw.contains(Access::EXECUTE));
    assert!(rw.intersects(Access::WRITE | Access::EXECUTE));
    assert_eq!(rw & !Access::READ, Access::WRITE);
    assert_eq!(rw.without(Access::WRITE), Access::READ);

    let mut flags = Access::NONE;
    flags |= Access::EXECUTE;
    assert_eq!(flags.bits(), 4);
}

#[test]
fn debug_lists_names() {
    assert_eq!(format!("{:?}", Access::READ | Access::EXECUTE), "Access(READ | EXECUTE)");
    assert_eq!(format!("{:?}", Access::NONE), "Access(empty)");
}

proptest! {
    #[test]
    fn with_then_without_clears(bits in 0u8..8, other in 0u8..8) {
        let flags = Access::from_bits(bits);
        let other = Access::from_bits(other);
        prop_assert!(!flags.with(other).without(other).intersects(other));
        prop_assert!(flags.with(other).contains(other));
    }
}
