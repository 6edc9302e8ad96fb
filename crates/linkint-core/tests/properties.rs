//! Property-based tests for digit-list arithmetic.
//!
//! Results are checked against native integers where they fit and against
//! `num-bigint` beyond that.

use std::cmp::Ordering;
use std::rc::Rc;

use num_bigint::BigUint;
use proptest::prelude::*;

use linkint_core::{BigInt, LinkedList};
use linkint_memory::NodePool;

fn big(value: u128) -> BigInt {
    BigInt::from(value)
}

fn reference(n: &BigInt) -> BigUint {
    n.to_string().parse().unwrap()
}

fn decimal() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,60}|0"
}

#[derive(Debug, Clone)]
enum Edit {
    Push(u8),
    Pop,
    Insert(usize, u8),
    Remove(u8),
    Resize(usize, u8),
    Append(Vec<u8>),
    Clear,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0u8..8).prop_map(Edit::Push),
        Just(Edit::Pop),
        (any::<usize>(), 0u8..8).prop_map(|(at, v)| Edit::Insert(at, v)),
        (0u8..8).prop_map(Edit::Remove),
        (0usize..24, 0u8..8).prop_map(|(n, v)| Edit::Resize(n, v)),
        proptest::collection::vec(0u8..8, 0..6).prop_map(Edit::Append),
        Just(Edit::Clear),
    ]
}

/// Nodes reachable from the head, stopping one past `limit` so a cycle
/// cannot hang the walk.
fn reachable(list: &LinkedList<u8>, limit: usize) -> usize {
    let mut cursor = list.cursor();
    let mut count = 0;
    let mut item = cursor.traverse(true);
    while item.is_some() && count <= limit {
        count += 1;
        item = cursor.traverse(false);
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Rendering matches the native decimal form.
    #[test]
    fn renders_like_native(x in any::<u64>()) {
        prop_assert_eq!(big(u128::from(x)).to_string(), x.to_string());
    }

    /// Digits given most significant first render back unchanged.
    #[test]
    fn digit_round_trip(digits in proptest::collection::vec(0u8..10, 1..80)) {
        let n = BigInt::from_digits(&digits);
        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = text.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(n.to_string(), expected);
    }

    /// Addition is commutative and agrees with native addition.
    #[test]
    fn addition_commutes(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (big(u128::from(a)), big(u128::from(b)));
        let expected = (u128::from(a) + u128::from(b)).to_string();
        prop_assert_eq!((&x + &y).to_string(), expected.clone());
        prop_assert_eq!((&y + &x).to_string(), expected);
    }

    /// Addition is associative.
    #[test]
    fn addition_associates(a in any::<u32>(), b in any::<u64>(), c in any::<u32>()) {
        let (x, y, z) = (big(u128::from(a)), big(u128::from(b)), big(u128::from(c)));
        let left = &(&x + &y) + &z;
        let right = &x + &(&y + &z);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(
            left.to_u128(),
            Some(u128::from(a) + u128::from(b) + u128::from(c))
        );
    }

    /// (a - b) + b == a when a >= b, and a - b == 0 otherwise.
    #[test]
    fn subtraction_inverts_addition(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (big(u128::from(a)), big(u128::from(b)));
        let diff = &x - &y;
        if a >= b {
            prop_assert_eq!(&(&diff + &y), &x);
            prop_assert_eq!(diff.to_u128(), Some(u128::from(a - b)));
            prop_assert!(x.checked_sub(&y).is_some());
        } else {
            prop_assert!(diff.is_zero());
            prop_assert!(x.checked_sub(&y).is_none());
        }
    }

    /// Multiplication agrees with native multiplication.
    #[test]
    fn multiplication_matches_native(a in any::<u64>(), b in any::<u64>()) {
        let product = big(u128::from(a)) * big(u128::from(b));
        prop_assert_eq!(product.to_u128(), Some(u128::from(a) * u128::from(b)));
    }

    /// Zero annihilates and one is the identity.
    #[test]
    fn multiplicative_identities(text in decimal()) {
        let n: BigInt = text.parse().unwrap();
        prop_assert!((&n * &big(0)).is_zero());
        prop_assert_eq!(&(&n * &big(1)), &n);
    }

    /// Comparison agrees with native ordering.
    #[test]
    fn comparison_matches_native(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(big(a).compare(&big(b)), a.cmp(&b));
    }

    /// Arithmetic beyond u128 agrees with num-bigint.
    #[test]
    fn large_operands_match_reference(a in decimal(), b in decimal()) {
        let (x, y): (BigInt, BigInt) = (a.parse().unwrap(), b.parse().unwrap());
        let (rx, ry) = (reference(&x), reference(&y));

        prop_assert_eq!(reference(&(&x + &y)), &rx + &ry);
        prop_assert_eq!(reference(&(&x * &y)), &rx * &ry);
        if rx >= ry {
            prop_assert_eq!(reference(&(&x - &y)), &rx - &ry);
        } else {
            prop_assert!((&x - &y).is_zero());
        }
        prop_assert_eq!(x.compare(&y), rx.cmp(&ry));
    }

    /// Normalizing twice changes nothing.
    #[test]
    fn normalize_idempotent(text in decimal()) {
        let mut n: BigInt = text.parse().unwrap();
        let before: Vec<u8> = n.digits().collect();
        n.normalize();
        prop_assert_eq!(n.digits().collect::<Vec<_>>(), before);
        prop_assert_eq!(n.to_string(), text);
    }

    /// Reversing twice restores the list.
    #[test]
    fn reverse_is_involution(items in proptest::collection::vec(any::<i64>(), 0..50)) {
        let mut list: LinkedList<i64> = items.iter().copied().collect();
        list.reverse();
        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
        list.reverse();
        prop_assert_eq!(list.to_vec(), items);
    }

    /// Sorted insertion yields a sorted list.
    #[test]
    fn insert_sorted_sorts(items in proptest::collection::vec(any::<i32>(), 0..50)) {
        let mut list = LinkedList::new();
        for &item in &items {
            list.insert_sorted(item);
        }
        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(list.to_vec(), expected);
    }

    /// Random edits keep the list in step with a `Vec` model: the recorded
    /// length equals the reachable node count and the pool's live count.
    #[test]
    fn edits_track_vec_model(edits in proptest::collection::vec(edit(), 0..60)) {
        let pool = NodePool::shared();
        let mut list = LinkedList::new_in(Rc::clone(&pool));
        let mut model: Vec<u8> = Vec::new();

        for edit in edits {
            match edit {
                Edit::Push(v) => {
                    list.push(v);
                    model.insert(0, v);
                }
                Edit::Pop => {
                    let expected = (!model.is_empty()).then(|| model.remove(0));
                    prop_assert_eq!(list.pop(), expected);
                }
                Edit::Insert(at, v) => {
                    let position = at % (model.len() + 1) + 1;
                    list.insert(position, v);
                    model.insert(position - 1, v);
                }
                Edit::Remove(v) => {
                    let found = model.iter().position(|&x| x == v);
                    if let Some(i) = found {
                        model.remove(i);
                    }
                    prop_assert_eq!(list.remove(&v), found.is_some());
                }
                Edit::Resize(n, v) => {
                    list.resize(n, v);
                    model.resize(n, v);
                }
                Edit::Append(items) => {
                    let mut other = LinkedList::new_in(Rc::clone(&pool));
                    other.extend(items.iter().copied());
                    list.append(&mut other);
                    prop_assert!(other.is_empty());
                    model.extend(items);
                }
                Edit::Clear => {
                    list.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(reachable(&list, model.len()), model.len());
            prop_assert_eq!(list.to_vec(), model.clone());
            prop_assert_eq!(pool.borrow().live(), model.len());
        }
    }

    /// sub_list matches slicing.
    #[test]
    fn sub_list_matches_slice(
        items in proptest::collection::vec(any::<u16>(), 1..40),
        start in 1usize..40,
        length in 0usize..40,
    ) {
        let list: LinkedList<u16> = items.iter().copied().collect();
        let sub = list.sub_list(start, length);
        let expected: Vec<u16> = if start + length - 1 > items.len() || length == 0 {
            Vec::new()
        } else {
            items[start - 1..start - 1 + length].to_vec()
        };
        prop_assert_eq!(sub.to_vec(), expected);
        prop_assert_eq!(list.to_vec(), items);
    }
}

/// The six fixed scenarios from the arithmetic contract.
#[test]
fn concrete_scenarios() {
    assert_eq!((big(0) + big(0)).to_string(), "0");
    assert_eq!((big(246) + big(135)).to_string(), "381");
    assert_eq!((big(135) - big(246)).to_string(), "0");
    assert_eq!((big(99) + big(1)).to_string(), "100");
    assert_eq!((big(123) * big(456)).to_string(), "56088");

    let list: LinkedList<u8> = [1, 2, 3, 4, 5].into_iter().collect();
    assert_eq!(list.sub_list(2, 3).to_vec(), [2, 3, 4]);
    assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
}

/// Ordering operators follow `compare`.
#[test]
fn ordering_operators() {
    assert!(big(10) > big(9));
    assert!(big(10) >= big(10));
    assert_eq!(big(3).cmp(&big(30)), Ordering::Less);
    let mut values = vec![big(30), big(3), big(300), big(0)];
    values.sort();
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["0", "3", "30", "300"]);
}
