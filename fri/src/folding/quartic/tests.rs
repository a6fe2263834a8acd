// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{eval, evaluate_batch, interpolate_batch, to_quartic_vec, transpose};
use math::{fields::f32::BaseElement, polynom, FieldElement};

#[test]
fn eval_degree_3() {
    let x = BaseElement::new(7);
    let poly = [
        BaseElement::new(1),
        BaseElement::new(2),
        BaseElement::new(3),
        BaseElement::new(4),
    ];
    assert_eq!(polynom::eval(&poly, x), eval(&poly, x));
}

#[test]
fn interpolate_batch_matches_lagrange() {
    let n = 16;
    let xs: Vec<[BaseElement; 4]> = (0..n)
        .map(|_| [BaseElement::rand(), BaseElement::rand(), BaseElement::rand(), BaseElement::rand()])
        .collect();
    let ys: Vec<[BaseElement; 4]> = (0..n)
        .map(|_| [BaseElement::rand(), BaseElement::rand(), BaseElement::rand(), BaseElement::rand()])
        .collect();

    let polys = interpolate_batch(&xs, &ys);
    for ((xs, ys), poly) in xs.iter().zip(ys.iter()).zip(polys.iter()) {
        let expected = polynom::interpolate(xs, ys, false);
        assert_eq!(expected, poly.to_vec());
    }
}

#[test]
fn evaluate_batch_matches_pointwise_eval() {
    let n = 8;
    let polys: Vec<[BaseElement; 4]> = (0..n)
        .map(|_| [BaseElement::rand(), BaseElement::rand(), BaseElement::rand(), BaseElement::rand()])
        .collect();
    let x = BaseElement::rand();

    let expected = polys.iter().map(|p| polynom::eval(p, x)).collect::<Vec<_>>();
    assert_eq!(expected, evaluate_batch(&polys, x));
}

#[test]
fn transpose_stride_1() {
    let source = (0u32..16).map(BaseElement::new).collect::<Vec<_>>();
    let result = transpose(&source, 1);

    assert_eq!(4, result.len());
    for (i, row) in result.iter().enumerate() {
        let i = i as u32;
        assert_eq!(
            [
                BaseElement::new(i),
                BaseElement::new(i + 4),
                BaseElement::new(i + 8),
                BaseElement::new(i + 12)
            ],
            *row
        );
    }
}

#[test]
fn transpose_stride_2() {
    let source = (0u32..32).map(BaseElement::new).collect::<Vec<_>>();
    let result = transpose(&source, 2);

    assert_eq!(4, result.len());
    for (i, row) in result.iter().enumerate() {
        let i = i as u32;
        assert_eq!(
            [
                BaseElement::new(i * 2),
                BaseElement::new((i + 4) * 2),
                BaseElement::new((i + 8) * 2),
                BaseElement::new((i + 12) * 2)
            ],
            *row
        );
    }
}

#[test]
fn quartic_vec() {
    let source = (0u32..16).map(BaseElement::new).collect::<Vec<_>>();
    let result = to_quartic_vec(source);
    assert_eq!(4, result.len());
    assert_eq!(
        [BaseElement::new(4), BaseElement::new(5), BaseElement::new(6), BaseElement::new(7)],
        result[1]
    );
}
