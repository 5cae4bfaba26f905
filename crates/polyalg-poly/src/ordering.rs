//! Monomial orderings used when canonicalizing polynomials.
//!
//! Monomials carry named variables rather than fixed positions, so two
//! monomials are compared over the union of their variables sorted by
//! name: the alphabetically first variable is the most significant.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::monomial::Monomial;

type Exponents = SmallVec<[u32; 8]>;

/// How the summands of a canonical polynomial are ranked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Walks the shared variables by name and ranks the monomial with the
    /// higher exponent at the first difference.
    Lex,

    /// Ranks by total degree, falling back to [`MonomialOrder::Lex`].
    Grlex,

    /// Ranks by total degree, then walks the shared variables from the
    /// last name backwards: the monomial with the lower exponent at the
    /// first difference ranks higher.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Ranks `a` against `b`; `Greater` means `a` leads.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns the conventional short name, e.g. `"grevlex"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lays out the exponents of both monomials over their shared variable
/// set, sorted by name.
fn aligned(a: &Monomial, b: &Monomial) -> (Exponents, Exponents) {
    let mut names: SmallVec<[&str; 8]> = a
        .powers()
        .chain(b.powers())
        .map(|(v, _)| v.name())
        .collect();
    names.sort_unstable();
    names.dedup();

    let exponents_of = |m: &Monomial| -> Exponents {
        names
            .iter()
            .map(|name| {
                m.powers()
                    .find(|(v, _)| v.name() == *name)
                    .map_or(0, |(_, e)| e)
            })
            .collect()
    };

    (exponents_of(a), exponents_of(b))
}

fn cmp_exponents_lex(a: &[u32], b: &[u32]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials lexicographically.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    let (ea, eb) = aligned(a, b);
    cmp_exponents_lex(&ea, &eb)
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    // First compare total degree
    match a.degree().cmp(&b.degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Then compare in reverse order, reversed
    let (ea, eb) = aligned(a, b);
    for (x, y) in ea.iter().zip(&eb).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    // First compare total degree
    match a.degree().cmp(&b.degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Then lexicographic
    cmp_lex(a, b)
}
