//! Opt-in canonical form for monomials and polynomials.
//!
//! Arithmetic leaves like monomials unmerged so results stay auditable.
//! Canonicalization prunes zero exponents, orders each monomial's
//! variables by name, merges like monomials, drops vanishing
//! coefficients and sorts the summands by a [`MonomialOrder`].

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::polynomial::Polynomial;

/// Settings for [`Polynomial::canonicalize_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanonicalConfig {
    /// Ordering of the summands, leading monomial first.
    pub order: MonomialOrder,
    /// Merged monomials with `|coefficient| <= zero_tolerance` are dropped.
    /// Non-finite coefficients are always kept.
    pub zero_tolerance: f64,
    /// Remove zero-exponent entries from every monomial.
    pub prune_zero_exponents: bool,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            order: MonomialOrder::default(),
            zero_tolerance: 0.0,
            prune_zero_exponents: true,
        }
    }
}

/// Identifies like monomials: the sorted `(name, exponent)` pairs with a
/// positive exponent.
type LikeKey = SmallVec<[(String, u32); 4]>;

fn like_key(m: &Monomial) -> LikeKey {
    let mut key: LikeKey = m.powers().map(|(v, e)| (v.name.clone(), e)).collect();
    key.sort_unstable();
    key
}

impl Monomial {
    /// Returns the canonical form: zero exponents pruned and variables
    /// sorted by name.
    #[must_use]
    pub fn canonical(&self) -> Self {
        self.sorted(true)
    }

    fn sorted(&self, prune: bool) -> Self {
        let mut pairs: Vec<_> = self
            .variables
            .iter()
            .cloned()
            .zip(self.exponents.iter().copied())
            .filter(|&(_, e)| !prune || e > 0)
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

        let (variables, exponents): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self {
            coefficient: self.coefficient,
            variables,
            exponents,
        }
    }
}

impl Polynomial {
    /// Returns the canonical form under [`CanonicalConfig::default`].
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        self.canonicalize_with(&CanonicalConfig::default())
    }

    /// Returns the canonical form under `config`.
    ///
    /// The result evaluates to the same value as `self` up to
    /// floating-point rounding in the merged coefficients.
    #[must_use]
    pub fn canonicalize_with(&self, config: &CanonicalConfig) -> Self {
        let mut index: FxHashMap<LikeKey, usize> = FxHashMap::default();
        let mut merged: Vec<Monomial> = Vec::with_capacity(self.len());

        for m in &self.monomials {
            match index.entry(like_key(m)) {
                Entry::Occupied(slot) => merged[*slot.get()].coefficient += m.coefficient,
                Entry::Vacant(slot) => {
                    slot.insert(merged.len());
                    merged.push(m.sorted(config.prune_zero_exponents));
                }
            }
        }

        // NaN compares false against any tolerance
        merged.retain(|m| {
            !m.coefficient.is_finite() || m.coefficient.abs() > config.zero_tolerance
        });
        merged.sort_by(|a, b| config.order.compare(b, a));

        debug!(
            order = %config.order,
            before = self.len(),
            after = merged.len(),
            "canonicalized polynomial"
        );
        Self::new(merged)
    }
}
