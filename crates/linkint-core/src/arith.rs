//! Digit-wise arithmetic on [`BigInt`].
//!
//! Each operation walks its operands least significant digit first with a
//! pair of cursors and builds the result in a fresh list on the left
//! operand's pool. Results are always normalized.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::rc::Rc;

use num_traits::CheckedSub;
use tracing::{debug, trace};

use crate::bigint::BigInt;
use crate::constants::RADIX;
use crate::list::LinkedList;

/// Schoolbook addition with carry propagation.
pub(crate) fn add_digits(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    trace!(
        lhs_digits = lhs.digit_count(),
        rhs_digits = rhs.digit_count(),
        "add"
    );
    let mut total = LinkedList::new_in(Rc::clone(lhs.pool()));
    let mut ls = lhs.digits.cursor();
    let mut rs = rhs.digits.cursor();
    let mut left = ls.traverse(true);
    let mut right = rs.traverse(true);
    let mut carry = 0u8;

    while left.is_some() || right.is_some() || carry != 0 {
        let digit_sum = left.unwrap_or(0) + right.unwrap_or(0) + carry;
        total.push(digit_sum % RADIX);
        carry = digit_sum / RADIX;
        left = ls.traverse(false);
        right = rs.traverse(false);
    }

    // Pushing leaves the most significant digit at the head; reverse to
    // least-significant-first.
    total.reverse();
    BigInt::from_list(total)
}

/// `lhs - rhs`, clamped to zero when `rhs >= lhs`.
pub(crate) fn saturating_difference(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.compare(rhs) {
        Ordering::Greater => borrow_difference(lhs, rhs),
        Ordering::Less | Ordering::Equal => BigInt::with_pool(Rc::clone(lhs.pool())),
    }
}

/// `lhs - rhs`, or `None` when `rhs > lhs`.
pub(crate) fn checked_difference(lhs: &BigInt, rhs: &BigInt) -> Option<BigInt> {
    match lhs.compare(rhs) {
        Ordering::Less => None,
        Ordering::Equal => Some(BigInt::with_pool(Rc::clone(lhs.pool()))),
        Ordering::Greater => Some(borrow_difference(lhs, rhs)),
    }
}

/// Borrow-propagating subtraction. Requires `lhs > rhs`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn borrow_difference(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    trace!(
        lhs_digits = lhs.digit_count(),
        rhs_digits = rhs.digit_count(),
        "subtract"
    );
    let mut difference = LinkedList::new_in(Rc::clone(lhs.pool()));
    let mut ls = lhs.digits.cursor();
    let mut rs = rhs.digits.cursor();
    let mut left = ls.traverse(true);
    let mut right = rs.traverse(true);
    let mut borrow = 0i16;

    while left.is_some() || right.is_some() {
        let mut digit = i16::from(left.unwrap_or(0)) - i16::from(right.unwrap_or(0)) + borrow;
        borrow = 0;
        if digit < 0 {
            digit += i16::from(RADIX);
            borrow = -1;
        }
        difference.push(digit as u8);
        left = ls.traverse(false);
        right = rs.traverse(false);
    }
    debug_assert_eq!(borrow, 0, "minuend smaller than subtrahend");

    difference.reverse();
    BigInt::from_list(difference)
}

/// Schoolbook multiplication, O(p·q) in the operand digit counts.
///
/// The product list is pre-sized to `p + q` zero digits, enough to hold any
/// carry; normalization trims what is left unused.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul_digits(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let p = lhs.digit_count();
    let q = rhs.digit_count();
    debug!(lhs_digits = p, rhs_digits = q, "schoolbook multiply");

    let radix = u32::from(RADIX);
    let mut product = LinkedList::new_in(Rc::clone(lhs.pool()));
    product.resize(p + q, 0);

    // `row` addresses product[i] for the current multiplier digit b_i.
    let mut row = product.head_node();
    let mut b_cursor = rhs.digits.cursor();
    let mut b = b_cursor.traverse(true);
    while let (Some(b_i), Some(row_start)) = (b, row) {
        let mut slot = Some(row_start);
        let mut carry = 0u32;
        let mut a_cursor = lhs.digits.cursor();
        let mut a = a_cursor.traverse(true);
        while let (Some(a_j), Some(id)) = (a, slot) {
            let value = u32::from(product.node_item(id)) + carry + u32::from(a_j) * u32::from(b_i);
            product.set_node_item(id, (value % radix) as u8);
            carry = value / radix;
            slot = product.next_node(id);
            a = a_cursor.traverse(false);
        }
        // slot now addresses product[i + p], untouched by earlier rows.
        if let Some(id) = slot {
            let value = u32::from(product.node_item(id)) + carry;
            debug_assert!(value < radix);
            product.set_node_item(id, value as u8);
        }
        row = product.next_node(row_start);
        b = b_cursor.traverse(false);
    }

    BigInt::from_list(product)
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $func:path) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = $func(&*self, rhs);
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $func(&*self, &rhs);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign, add_digits);
forward_binop!(impl Sub, sub, SubAssign, sub_assign, saturating_difference);
forward_binop!(impl Mul, mul, MulAssign, mul_assign, mul_digits);

impl CheckedSub for BigInt {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        checked_difference(self, v)
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::new(), |acc, n| add_digits(&acc, &n))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::new(), |acc, n| add_digits(&acc, n))
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1u8), |acc, n| mul_digits(&acc, &n))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1u8), |acc, n| mul_digits(&acc, n))
    }
}
