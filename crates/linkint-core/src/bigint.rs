//! Decimal arbitrary-precision unsigned integer.
//!
//! A `BigInt` stores one decimal digit per list node, least significant digit
//! at the head. The list is never empty and never carries high zero digits:
//! zero is the single digit `0`. Operators are implemented in the `arith`
//! module.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::str::FromStr;

use linkint_memory::{local_pool, PoolHandle};
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith;
use crate::constants::{MAX_DIGIT, RADIX};
use crate::cursor::Iter;
use crate::error::ParseBigIntError;
use crate::list::LinkedList;

/// Arbitrary-precision unsigned integer backed by a pool-allocated digit list.
#[derive(Clone)]
pub struct BigInt {
    pub(crate) digits: LinkedList<u8>,
}

impl BigInt {
    /// Zero, on this thread's digit pool.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pool(local_pool::<u8>())
    }

    /// Zero, drawing digit nodes from `pool`. Results of arithmetic on this
    /// value are allocated from the same pool.
    #[must_use]
    pub fn with_pool(pool: PoolHandle<u8>) -> Self {
        let mut digits = LinkedList::new_in(pool);
        digits.push(0);
        Self { digits }
    }

    /// Build from a native integer, drawing digit nodes from `pool`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u128_in(value: u128, pool: PoolHandle<u8>) -> Self {
        if value == 0 {
            return Self::with_pool(pool);
        }
        let mut digits = LinkedList::new_in(pool);
        let mut rest = value;
        while rest != 0 {
            digits.push((rest % u128::from(RADIX)) as u8);
            rest /= u128::from(RADIX);
        }
        // Pushing leaves the most significant digit at the head; reverse to
        // least-significant-first.
        digits.reverse();
        Self { digits }
    }

    /// Build from digit values given most significant first.
    ///
    /// # Panics
    /// If any value is not a decimal digit.
    #[must_use]
    pub fn from_digits(digits: &[u8]) -> Self {
        let mut list = LinkedList::new();
        for &digit in digits {
            assert!(digit <= MAX_DIGIT, "{digit} is not a decimal digit");
            list.push(digit);
        }
        Self::from_list(list)
    }

    /// Wrap a least-significant-first digit list, normalizing it.
    pub(crate) fn from_list(digits: LinkedList<u8>) -> Self {
        let mut value = Self { digits };
        value.normalize();
        value
    }

    /// The pool digit nodes are drawn from.
    #[must_use]
    pub fn pool(&self) -> &PoolHandle<u8> {
        self.digits.pool()
    }

    /// Number of decimal digits. Zero has one digit.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits.front() == Some(0)
    }

    /// Digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> Iter<'_, u8> {
        self.digits.iter()
    }

    /// The underlying digit list, least significant digit at the head.
    #[must_use]
    pub fn as_list(&self) -> &LinkedList<u8> {
        &self.digits
    }

    /// Strip high zero digits, keeping at least one digit. Idempotent.
    pub fn normalize(&mut self) -> &mut Self {
        let mut keep = 1;
        for (i, digit) in self.digits.iter().enumerate() {
            if digit != 0 {
                keep = i + 1;
            }
        }
        if self.digits.len() != keep {
            self.digits.resize(keep, 0);
        }
        self
    }

    /// Three-way comparison: digit count first, then the most significant
    /// differing digit.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.digit_count().cmp(&other.digit_count()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        // Walking least significant first, the last difference seen is the
        // most significant one.
        let mut ordering = Ordering::Equal;
        for (lhs, rhs) in self.digits().zip(other.digits()) {
            if lhs != rhs {
                ordering = lhs.cmp(&rhs);
            }
        }
        ordering
    }

    /// `self - other`, or `None` if `other` is larger.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        arith::checked_difference(self, other)
    }

    /// Add one in place (prefix `++`).
    pub fn incr(&mut self) -> &mut Self {
        let one = Self::from_u128_in(1, Rc::clone(self.pool()));
        *self = arith::add_digits(self, &one);
        self
    }

    /// Subtract one in place (prefix `--`). Zero stays zero.
    pub fn decr(&mut self) -> &mut Self {
        let one = Self::from_u128_in(1, Rc::clone(self.pool()));
        *self = arith::saturating_difference(self, &one);
        self
    }

    /// Convert to a native integer if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        let digits: Vec<u8> = self.digits().collect();
        digits.iter().rev().try_fold(0u128, |acc, &digit| {
            acc.checked_mul(u128::from(RADIX))?
                .checked_add(u128::from(digit))
        })
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_u128_in(u128::from(value), local_pool::<u8>())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<usize> for BigInt {
    fn from(value: usize) -> Self {
        Self::from_u128_in(value as u128, local_pool::<u8>())
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let mut digits = LinkedList::new();
        for (index, byte) in s.bytes().enumerate() {
            if !byte.is_ascii_digit() {
                let found = s[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseBigIntError::InvalidDigit { found, index });
            }
            digits.push(byte - b'0');
        }
        Ok(Self::from_list(digits))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<u8> = self.digits().collect();
        let text: String = digits.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digit_count().hash(state);
        for digit in self.digits() {
            digit.hash(state);
        }
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self::from(1u8)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
