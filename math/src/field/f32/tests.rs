// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{BaseElement, FieldElement, StarkField, M};

// BASIC ALGEBRA
// ================================================================================================

#[test]
fn add() {
    // identity
    let r = BaseElement::rand();
    assert_eq!(r, r + BaseElement::ZERO);

    // test addition within bounds
    assert_eq!(BaseElement::new(5), BaseElement::new(2) + BaseElement::new(3));

    // test overflow
    let t = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ZERO, t + BaseElement::ONE);
    assert_eq!(BaseElement::ONE, t + BaseElement::new(2));
}

#[test]
fn sub() {
    // identity
    let r = BaseElement::rand();
    assert_eq!(r, r - BaseElement::ZERO);

    // test subtraction within bounds
    assert_eq!(BaseElement::new(2), BaseElement::new(5) - BaseElement::new(3));

    // test underflow
    assert_eq!(BaseElement::new(M - 2), BaseElement::new(3) - BaseElement::new(5));
}

#[test]
fn mul() {
    // identity
    let r = BaseElement::rand();
    assert_eq!(BaseElement::ZERO, r * BaseElement::ZERO);
    assert_eq!(r, r * BaseElement::ONE);

    // test multiplication within bounds
    assert_eq!(BaseElement::new(15), BaseElement::new(5) * BaseElement::new(3));

    // test overflow
    let m = BaseElement::new(M - 1);
    assert_eq!(BaseElement::ONE, m * m);
    assert_eq!(m - BaseElement::ONE, m * BaseElement::new(2));
}

#[test]
fn inv() {
    // identity
    assert_eq!(BaseElement::ONE, BaseElement::ONE.inv());
    assert_eq!(BaseElement::ZERO, BaseElement::ZERO.inv());

    for _ in 0..100 {
        let r = BaseElement::rand();
        assert_eq!(BaseElement::ONE, r * r.inv());
    }
}

#[test]
fn exp() {
    let a = BaseElement::ZERO;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ZERO);

    let a = BaseElement::ONE;
    assert_eq!(a.exp(0), BaseElement::ONE);
    assert_eq!(a.exp(1), BaseElement::ONE);
    assert_eq!(a.exp(3), BaseElement::ONE);

    let a = BaseElement::rand();
    assert_eq!(a.exp(3), a * a * a);
}

// ROOTS OF UNITY
// ================================================================================================

#[test]
fn get_root_of_unity() {
    let root_25 = BaseElement::get_root_of_unity(25);
    assert_eq!(BaseElement::TWO_ADIC_ROOT_OF_UNITY, root_25);
    assert_eq!(BaseElement::ONE, root_25.exp(1u64 << 25));
    assert_ne!(BaseElement::ONE, root_25.exp(1u64 << 24));

    let root_14 = BaseElement::get_root_of_unity(14);
    let expected = root_25.exp(1u64 << 11);
    assert_eq!(expected, root_14);
    assert_eq!(BaseElement::ONE, root_14.exp(1u64 << 14));
    assert_ne!(BaseElement::ONE, root_14.exp(1u64 << 13));
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

#[test]
fn elements_as_bytes() {
    let elements = vec![BaseElement::new(1), BaseElement::new(2), BaseElement::new(M - 1)];
    let mut expected = Vec::new();
    for element in elements.iter() {
        expected.extend_from_slice(&element.as_int().to_le_bytes()[..4]);
    }
    assert_eq!(expected, BaseElement::elements_as_bytes(&elements));
}

#[test]
fn from_random_bytes() {
    // canonical value round-trips
    let value = (M - 1).to_le_bytes();
    assert_eq!(Some(BaseElement::new(M - 1)), BaseElement::from_random_bytes(&value));

    // non-canonical value is rejected
    let value = M.to_le_bytes();
    assert_eq!(None, BaseElement::from_random_bytes(&value));

    // wrong number of bytes is rejected
    assert_eq!(None, BaseElement::from_random_bytes(&[1, 2, 3]));
}
