//! Exponent-aligned decimal comparison.
//!
//! A decimal is an unsigned significand times a base-10 exponent. Two
//! representations exist: a compact one whose significand fits in a `u64`,
//! and a multi-precision one backed by [`BigUint`]. Comparison across any
//! pair reduces to one primitive, `sign(a - b * 10^e)` with `e >= 0`,
//! after aligning the smaller exponent onto the larger.
//!
//! Significands of zero form a single equivalence class regardless of
//! exponent.

use std::cmp::Ordering;

use crate::biguint::{BigUint, POW10_U64};

/// An unsigned decimal value: `significand × 10^exponent`.
///
/// Immutable after construction. Negative exponents encode fractional
/// digits (`scale = -exponent` in the wire format).
#[derive(Clone, Debug)]
pub enum Decimal {
    /// Significand representable in 64 bits.
    Compact {
        /// The unsigned significand.
        significand: u64,
        /// The ten's exponent.
        exponent: i32,
    },
    /// Multi-precision significand.
    Big {
        /// The unsigned significand.
        significand: BigUint,
        /// The ten's exponent.
        exponent: i32,
    },
}

/// Borrowed view of a decimal's significand, independent of representation.
#[derive(Clone, Copy, Debug)]
pub enum Significand<'a> {
    /// A 64-bit significand.
    Compact(u64),
    /// A multi-precision significand.
    Big(&'a BigUint),
}

impl Decimal {
    /// A compact decimal from a 64-bit significand.
    #[inline]
    pub fn compact(significand: u64, exponent: i32) -> Self {
        Decimal::Compact {
            significand,
            exponent,
        }
    }

    /// A multi-precision decimal from an owned significand.
    #[inline]
    pub fn big(significand: BigUint, exponent: i32) -> Self {
        Decimal::Big {
            significand,
            exponent,
        }
    }

    /// A multi-precision decimal whose significand is parsed from a
    /// big-endian unsigned magnitude.
    #[inline]
    pub fn from_be_bytes(bytes: &[u8], exponent: i32) -> Self {
        Decimal::big(BigUint::from_be_bytes(bytes), exponent)
    }

    /// The ten's exponent.
    #[inline]
    pub fn exponent(&self) -> i32 {
        match self {
            Decimal::Compact { exponent, .. } | Decimal::Big { exponent, .. } => *exponent,
        }
    }

    /// The significand, borrowed.
    #[inline]
    pub fn significand(&self) -> Significand<'_> {
        match self {
            Decimal::Compact { significand, .. } => Significand::Compact(*significand),
            Decimal::Big { significand, .. } => Significand::Big(significand),
        }
    }

    /// Whether the significand is zero (the exponent is irrelevant then).
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self.significand() {
            Significand::Compact(v) => v == 0,
            Significand::Big(v) => v.is_zero(),
        }
    }

    /// Three-way comparison against another decimal.
    ///
    /// Exponents are aligned without mutating either value: the operand
    /// with the smaller exponent is compared against the other scaled by
    /// `10^|ea - eb|`, and the scaled side is never materialized unless
    /// the cheap filters cannot decide.
    pub fn compare_to(&self, other: &Decimal) -> Ordering {
        let ea = self.exponent();
        let eb = other.exponent();
        if ea == eb {
            return compare_significands(self.significand(), other.significand());
        }
        // The i32 difference can span the full u32 range.
        if ea < eb {
            let exponent = (i64::from(eb) - i64::from(ea)) as u32;
            compare_with_exponent(self.significand(), other.significand(), exponent)
        } else {
            let exponent = (i64::from(ea) - i64::from(eb)) as u32;
            compare_with_exponent(other.significand(), self.significand(), exponent).reverse()
        }
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

/// Compares two decimals given as big-endian unsigned magnitudes.
pub fn compare_decimal_bytes(a: &[u8], a_exponent: i32, b: &[u8], b_exponent: i32) -> Ordering {
    Decimal::from_be_bytes(a, a_exponent).compare_to(&Decimal::from_be_bytes(b, b_exponent))
}

/// Compares a big-endian magnitude decimal against a compact decimal.
pub fn compare_decimal_bytes_u64(a: &[u8], a_exponent: i32, b: u64, b_exponent: i32) -> Ordering {
    Decimal::from_be_bytes(a, a_exponent).compare_to(&Decimal::compact(b, b_exponent))
}

/// Compares a compact decimal against a big-endian magnitude decimal.
#[inline]
pub fn compare_decimal_u64_bytes(a: u64, a_exponent: i32, b: &[u8], b_exponent: i32) -> Ordering {
    compare_decimal_bytes_u64(b, b_exponent, a, a_exponent).reverse()
}

/// Compares two compact decimals.
pub fn compare_decimal_u64(a: u64, a_exponent: i32, b: u64, b_exponent: i32) -> Ordering {
    if a_exponent == b_exponent {
        return a.cmp(&b);
    }
    Decimal::compact(a, a_exponent).compare_to(&Decimal::compact(b, b_exponent))
}

/// Direct significand comparison for equal exponents.
fn compare_significands(a: Significand<'_>, b: Significand<'_>) -> Ordering {
    match (a, b) {
        (Significand::Compact(a), Significand::Compact(b)) => a.cmp(&b),
        (Significand::Compact(a), Significand::Big(b)) => b.compare_u64(a).reverse(),
        (Significand::Big(a), Significand::Compact(b)) => a.compare_u64(b),
        (Significand::Big(a), Significand::Big(b)) => a.cmp(b),
    }
}

/// Returns `sign(a - b * 10^exponent)` for `exponent >= 0`.
fn compare_with_exponent(a: Significand<'_>, b: Significand<'_>, exponent: u32) -> Ordering {
    match (a, b) {
        (Significand::Compact(a), Significand::Compact(b)) => cmp_u64_u64(a, b, exponent),
        (Significand::Compact(a), Significand::Big(b)) => cmp_u64_big(a, b, exponent),
        (Significand::Big(a), Significand::Compact(b)) => cmp_big_u64(a, b, exponent),
        (Significand::Big(a), Significand::Big(b)) => cmp_big_big(a, b, exponent),
    }
}

fn cmp_u64_u64(a: u64, b: u64, exponent: u32) -> Ordering {
    if a == 0 || b == 0 {
        return a.cmp(&b);
    }
    if let Some(&scale) = POW10_U64.get(exponent as usize) {
        // (a <=> b * 10^e) == (a / 10^e <=> b), remainder breaking ties.
        let div = a / scale;
        let rem = a % scale;
        return div.cmp(&b).then_with(|| rem.cmp(&0));
    }
    // 10^e >= 2^64 > a while b >= 1.
    Ordering::Less
}

fn cmp_u64_big(a: u64, b: &BigUint, exponent: u32) -> Ordering {
    if a == 0 {
        return if b.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }
    if b.is_zero() {
        return Ordering::Greater;
    }
    if let Some(&scale) = POW10_U64.get(exponent as usize) {
        let div = a / scale;
        let rem = a % scale;
        return b.compare_u64(div).reverse().then_with(|| rem.cmp(&0));
    }
    Ordering::Less
}

fn cmp_big_u64(a: &BigUint, b: u64, exponent: u32) -> Ordering {
    if a.is_zero() {
        return 0u64.cmp(&b);
    }
    if b == 0 {
        return Ordering::Greater;
    }
    // 10^e can push b past 64 bits, so reduce to the all-big variant.
    cmp_big_big(a, &BigUint::from(b), exponent)
}

/// Bit-length range of `significand * 10^exponent` for a non-zero
/// significand and `exponent >= 1`.
///
/// `log2(10) = 3.32...`, so `2^(3.3 e) < 10^e < 2^(10 e / 3)`, and a
/// product of an m-bit and an n-bit positive integer has m+n-1 or m+n
/// bits.
fn product_bits_range(significand: &BigUint, exponent: u32) -> (usize, usize) {
    debug_assert!(!significand.is_zero());
    debug_assert!(exponent >= 1);
    let bits = significand.bits();
    let min = (f64::from(exponent) * 3.3).floor() as usize;
    let max = (exponent as usize * 10 + 2) / 3;
    (bits + min - 1, bits + max)
}

fn cmp_big_big(a: &BigUint, b: &BigUint, exponent: u32) -> Ordering {
    if exponent == 0 {
        return a.cmp(b);
    }
    if a.is_zero() {
        return if b.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }
    if b.is_zero() {
        return Ordering::Greater;
    }
    // Mismatched bit lengths decide the comparison without multiplying.
    let a_bits = a.bits();
    let (lower, upper) = product_bits_range(b, exponent);
    if a_bits < lower {
        return Ordering::Less;
    }
    if a_bits > upper {
        return Ordering::Greater;
    }
    if exponent <= 9 {
        // 10^9 fits in a single limb.
        return a.cmp(&(b * (POW10_U64[exponent as usize] as u32)));
    }
    a.cmp(&(b * BigUint::power_of_10(exponent)))
}
