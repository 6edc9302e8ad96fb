//! # linkint-core
//!
//! Arbitrary-precision unsigned decimal integers built on a pool-backed
//! singly-linked list.
//!
//! [`LinkedList`] is a generic singly-linked sequence whose nodes are recycled
//! through a [`linkint_memory::NodePool`]. [`BigInt`] stores one decimal digit
//! per node, least significant first, and implements addition, saturating
//! subtraction, schoolbook multiplication and comparison by walking digit
//! lists in lock-step.
//!
//! # Example
//! ```
//! use linkint_core::BigInt;
//!
//! let a = BigInt::from(123u32);
//! let b: BigInt = "456".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "56088");
//! assert_eq!((&a - &b).to_string(), "0");
//! ```

pub(crate) mod arith;
pub mod bigint;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod list;

// Re-exports
pub use bigint::BigInt;
pub use constants::{exit_codes, RADIX};
pub use cursor::{Cursor, Iter};
pub use error::{ListError, ParseBigIntError};
pub use list::LinkedList;
