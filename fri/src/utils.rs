// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::options::FOLDING_FACTOR;

/// Maps positions in a source evaluation domain to positions in the folded
/// domain, i.e. to indexes of the Merkle leaves which pack
/// [FOLDING_FACTOR] source values each.
///
/// The returned list is de-duplicated and preserves the order of first
/// occurrence; query values revealed in proofs are indexed by position in
/// this list, so both the prover and the verifier must derive it
/// identically.
pub fn fold_positions(positions: &[usize], source_domain_size: usize) -> Vec<usize> {
    let target_domain_size = source_domain_size / FOLDING_FACTOR;

    let mut result = Vec::new();
    for position in positions {
        let position = position % target_domain_size;
        if !result.contains(&position) {
            result.push(position);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::fold_positions;

    #[test]
    fn fold_positions_dedupes_in_first_occurrence_order() {
        // domain of 64 folds into 16 leaves
        let positions = [2usize, 18, 3, 34, 50, 19];
        // 18 % 16 = 2 (dup), 34 % 16 = 2 (dup), 50 % 16 = 2 (dup), 19 % 16 = 3 (dup)
        assert_eq!(vec![2, 3], fold_positions(&positions, 64));

        let positions = [63usize, 1, 17, 30];
        assert_eq!(vec![15, 1, 14], fold_positions(&positions, 64));
    }
}
