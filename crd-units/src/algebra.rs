//! Term bookkeeping shared by concrete and generic composites

use std::hash::{Hash, Hasher};

/// Net powers smaller than this are treated as cancelled
pub(crate) const POWER_EPSILON: f64 = 1e-12;

/// One factor of a composite: a key raised to a power
pub(crate) trait Term: Copy {
    type Key: Copy + Eq + Ord + Hash;

    fn key(&self) -> Self::Key;
    fn exponent(&self) -> f64;
    fn from_parts(key: Self::Key, exponent: f64) -> Self;
}

/// Bit pattern of a power with `-0.0` folded onto `0.0`
pub(crate) fn power_bits(power: f64) -> u64 {
    if power == 0.0 {
        0.0f64.to_bits()
    } else {
        power.to_bits()
    }
}

fn sorted_keys<T: Term>(terms: &[T]) -> Vec<(T::Key, u64)> {
    let mut keys: Vec<_> = terms.iter().map(|t| (t.key(), power_bits(t.exponent()))).collect();
    keys.sort();
    keys
}

/// Bag equality over both sides
pub(crate) fn same_terms<T: Term>(a_num: &[T], a_den: &[T], b_num: &[T], b_den: &[T]) -> bool {
    a_num.len() == b_num.len()
        && a_den.len() == b_den.len()
        && sorted_keys(a_num) == sorted_keys(b_num)
        && sorted_keys(a_den) == sorted_keys(b_den)
}

/// Order-independent hash over both sides
pub(crate) fn hash_terms<T: Term, H: Hasher>(num: &[T], den: &[T], state: &mut H) {
    sorted_keys(num).hash(state);
    sorted_keys(den).hash(state);
}

/// Merge equal keys and cancel them across sides.
///
/// The net power of every key is the sum of its numerator powers minus the
/// sum of its denominator powers. Positive nets land in the numerator,
/// negative nets in the denominator with the sign flipped. Keys keep the
/// order of their first appearance.
pub(crate) fn simplify_terms<T: Term>(numerator: &mut Vec<T>, denominator: &mut Vec<T>) {
    let mut net: Vec<(T::Key, f64)> = Vec::new();

    let signed = numerator
        .iter()
        .map(|t| (t.key(), t.exponent()))
        .chain(denominator.iter().map(|t| (t.key(), -t.exponent())));

    for (key, power) in signed {
        match net.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += power,
            None => net.push((key, power)),
        }
    }

    numerator.clear();
    denominator.clear();
    for (key, total) in net {
        if total.abs() < POWER_EPSILON {
            continue;
        }
        if total > 0.0 {
            numerator.push(T::from_parts(key, total));
        } else {
            denominator.push(T::from_parts(key, -total));
        }
    }
}

/// Render `a * b / c / d` with each side sorted lexicographically.
///
/// An empty numerator renders as `1`, so the non-dimensional composite is `1`.
pub(crate) fn render_terms(numerator: Vec<String>, denominator: Vec<String>) -> String {
    let mut numerator = numerator;
    let mut denominator = denominator;
    numerator.sort();
    denominator.sort();

    let mut out = if numerator.is_empty() {
        "1".to_string()
    } else {
        numerator.join(" * ")
    };
    for d in denominator {
        out.push_str(" / ");
        out.push_str(&d);
    }
    out
}

/// Render a power suffix: nothing for 1, `^p` otherwise
pub(crate) fn render_power(base: &str, power: f64) -> String {
    if power == 1.0 {
        base.to_string()
    } else {
        format!("{}^{}", base, power)
    }
}
