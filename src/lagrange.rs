//! Lagrange interpolation weights at zero.
//!
//! The secret sits at `f(0)`, so recovering it (or, in the threshold flow,
//! recovering `B^{f(0)}` from group elements) needs the interpolation
//! weights `w_j = Π_{m≠j} (0 - x_m) / (x_j - x_m) mod q`. Evaluating the
//! Lagrange basis directly at zero never materializes the interpolated
//! polynomial's coefficients.
//!
//! Weights depend only on the index set and `q`: identical inputs always
//! produce identical weights, so a caller may cache a `LagrangeWeightSet`
//! per distinct quorum.

use crate::field::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;

/// Errors for weight computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LagrangeError {
    /// Indices repeat (or collide modulo `q`), so a denominator
    /// `x_j - x_m` vanishes and interpolation is undefined.
    DegenerateIndexSet,
}

/// Ordered `(index, weight)` pairs for one quorum, weights in `[0, q)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeWeightSet {
    pairs: Vec<(u32, BigUint)>,
}

impl LagrangeWeightSet {
    /// Number of participants in the quorum.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when the set holds no weights.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The ordered `(index, weight)` pairs.
    pub fn pairs(&self) -> &[(u32, BigUint)] {
        &self.pairs
    }

    /// Iterator over the quorum indices, in order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.pairs.iter().map(|(index, _)| *index)
    }
}

/// Computes the interpolation weights at `x = 0` for the given quorum.
///
/// # Arguments
/// * `indices` - distinct participant indices, each nonzero.
/// * `q` - the prime exponent-field order.
///
/// # Returns
/// * `Ok(LagrangeWeightSet)` ordered like `indices`.
/// * `Err(LagrangeError::DegenerateIndexSet)` if any index is zero, repeats,
///   or collides with another modulo `q`.
pub fn weights_at_zero(indices: &[u32], q: &BigUint) -> Result<LagrangeWeightSet, LagrangeError> {
    let field = PrimeField::new(q);

    // Residues mod q; index 0 (or a multiple of q) would put a participant's
    // point at the secret itself.
    let xs: Vec<BigUint> = indices
        .iter()
        .map(|&i| field.reduce(&BigUint::from(i)))
        .collect();
    for x in &xs {
        if x.is_zero() {
            return Err(LagrangeError::DegenerateIndexSet);
        }
    }
    // O(k^2) duplicate scan; quorums are small.
    for j in 0..xs.len() {
        for m in (j + 1)..xs.len() {
            if xs[j] == xs[m] {
                return Err(LagrangeError::DegenerateIndexSet);
            }
        }
    }

    let one = BigUint::from(1u32);
    let mut pairs = Vec::with_capacity(xs.len());
    for j in 0..xs.len() {
        let mut numerator = one.clone();
        let mut denominator = one.clone();
        for m in 0..xs.len() {
            if m == j {
                continue;
            }
            numerator = field.mul(&numerator, &field.neg(&xs[m]));
            denominator = field.mul(&denominator, &field.sub(&xs[j], &xs[m]));
        }
        let inverse = field
            .inv(&denominator)
            .ok_or(LagrangeError::DegenerateIndexSet)?;
        pairs.push((indices[j], field.mul(&numerator, &inverse)));
    }

    Ok(LagrangeWeightSet { pairs })
}
