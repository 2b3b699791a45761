//! A minimal multi-precision unsigned integer.
//!
//! Values are stored as 32-bit limbs in little-endian limb order. The
//! canonical form keeps the trailing limb non-zero (an empty limb vector
//! represents zero), so bit lengths and comparisons never have to look past
//! stale high limbs. Every constructor and every product re-establishes
//! this form before returning.

use std::cmp::Ordering;
use std::ops::Mul;
use std::sync::Mutex;

/// Powers of ten representable in 64 bits: `POW10_U64[k] == 10^k`.
pub(crate) const POW10_U64: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Process-wide table of `10^k` values, extended on demand.
///
/// Entries are leaked so the returned references stay valid for the process
/// lifetime; the mutex is held only while finding or extending the table.
static POW10_TABLE: Mutex<Vec<&'static BigUint>> = Mutex::new(Vec::new());

/// Arbitrary-precision unsigned integer.
///
/// Immutable after construction. Supports exactly what decimal comparison
/// needs: byte/u64 construction, bit length, three-way comparison, and
/// multiplication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    /// The zero value (no limbs).
    pub const ZERO: BigUint = BigUint { limbs: Vec::new() };

    /// Builds a value from limbs that may carry stale zero high limbs.
    pub(crate) fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        BigUint { limbs }
    }

    /// Parses a big-endian unsigned magnitude.
    ///
    /// Leading zero bytes are ignored; a leading partial group of 1-3 bytes
    /// is zero-extended into the top limb.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let bytes = &bytes[start..];
        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(4));
        // rchunks walks from the least significant end, short chunk last.
        for chunk in bytes.rchunks(4) {
            let mut limb = 0u32;
            for &b in chunk {
                limb = limb << 8 | u32::from(b);
            }
            limbs.push(limb);
        }
        debug_assert!(limbs.last() != Some(&0));
        BigUint { limbs }
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits: 0 iff zero, otherwise the position of
    /// the highest set bit plus one.
    #[inline]
    pub fn bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                debug_assert!(top != 0);
                self.limbs.len() * 32 - top.leading_zeros() as usize
            }
        }
    }

    /// Minimal big-endian encoding: empty for zero, otherwise the first
    /// byte is non-zero and the length is `ceil(bits / 8)`.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let size = (self.bits() + 7) / 8;
        let mut out = Vec::with_capacity(size);
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            if out.is_empty() {
                // top limb: emit only its significant bytes
                let head = size - i * 4;
                for shift in (0..head).rev() {
                    out.push((limb >> (shift * 8)) as u8);
                }
            } else {
                out.extend_from_slice(&limb.to_be_bytes());
            }
        }
        debug_assert_eq!(out.len(), size);
        debug_assert!(out.first() != Some(&0));
        out
    }

    /// The value as a `u64`, when it fits.
    #[inline]
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(u64::from(*lo)),
            [lo, hi] => Some(u64::from(*hi) << 32 | u64::from(*lo)),
            _ => None,
        }
    }

    /// Three-way comparison against a 64-bit value.
    pub fn compare_u64(&self, other: u64) -> Ordering {
        let (lo, hi) = (other as u32, (other >> 32) as u32);
        match self.limbs.as_slice() {
            [] => 0u64.cmp(&other),
            [a0] => 0u32.cmp(&hi).then_with(|| a0.cmp(&lo)),
            [a0, a1] => a1.cmp(&hi).then_with(|| a0.cmp(&lo)),
            _ => Ordering::Greater,
        }
    }

    /// Returns a stable reference to `10^exponent` from the shared table,
    /// extending the table under the lock if needed.
    pub fn power_of_10(exponent: u32) -> &'static BigUint {
        let mut table = POW10_TABLE.lock().expect("power-of-ten table poisoned");
        let exponent = exponent as usize;
        if table.is_empty() {
            table.reserve(POW10_U64.len().max(exponent + 1));
            for &compact in POW10_U64.iter() {
                table.push(Box::leak(Box::new(BigUint::from(compact))));
            }
        }
        if exponent >= table.len() {
            tracing::trace!(exponent, len = table.len(), "extending power-of-ten table");
            while table.len() <= exponent {
                let next = table[table.len() - 1] * 10u32;
                table.push(Box::leak(Box::new(next)));
            }
        }
        table[exponent]
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        let (lo, hi) = (value as u32, (value >> 32) as u32);
        let limbs = if value == 0 {
            Vec::new()
        } else if hi == 0 {
            vec![lo]
        } else {
            vec![lo, hi]
        };
        BigUint { limbs }
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal bit lengths imply equal limb counts, so the limb walk below
        // only runs over same-length slices.
        self.bits()
            .cmp(&other.bits())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for BigUint {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl PartialEq<BigUint> for u64 {
    #[inline]
    fn eq(&self, other: &BigUint) -> bool {
        other == self
    }
}

impl Mul<u32> for &BigUint {
    type Output = BigUint;

    /// Schoolbook multiplication by a single limb, carrying through a
    /// 64-bit accumulator.
    fn mul(self, multiplier: u32) -> BigUint {
        if multiplier == 0 || self.is_zero() {
            return BigUint::ZERO;
        }
        if multiplier == 1 {
            return self.clone();
        }
        if self.bits() == 1 {
            return BigUint::from(u64::from(multiplier));
        }
        let result_bits = self.bits() + 32 - multiplier.leading_zeros() as usize;
        let mut limbs = Vec::with_capacity(result_bits.div_ceil(32));
        let mut work = 0u64;
        for &limb in &self.limbs {
            work += u64::from(limb) * u64::from(multiplier);
            limbs.push(work as u32);
            work >>= 32;
        }
        if work != 0 {
            limbs.push(work as u32);
        }
        BigUint::from_limbs(limbs)
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    /// Schoolbook O(m·n) multiplication. The result vector is pre-sized
    /// from the operands' bit lengths, so carries cannot run off the end;
    /// the outer loop runs over the shorter operand.
    fn mul(self, multiplier: &BigUint) -> BigUint {
        if self.is_zero() || multiplier.is_zero() {
            return BigUint::ZERO;
        }
        if self.limbs.len() > multiplier.limbs.len() {
            return multiplier * self;
        }
        if self.bits() == 1 {
            return multiplier.clone();
        }
        if multiplier.bits() == 1 {
            return self.clone();
        }
        let result_bits = self.bits() + multiplier.bits();
        let mut limbs = vec![0u32; result_bits.div_ceil(32)];
        let tail = limbs.len();
        for (i, &a_limb) in self.limbs.iter().enumerate() {
            let a = u64::from(a_limb);
            let mut work = 0u64;
            for (j, &b_limb) in multiplier.limbs.iter().enumerate() {
                debug_assert!(work <= u64::from(u32::MAX));
                work += a * u64::from(b_limb) + u64::from(limbs[i + j]);
                limbs[i + j] = work as u32;
                work >>= 32;
            }
            for k in (i + multiplier.limbs.len())..tail {
                if work == 0 {
                    break;
                }
                work += u64::from(limbs[k]);
                limbs[k] = work as u32;
                work >>= 32;
            }
            debug_assert_eq!(work, 0);
        }
        BigUint::from_limbs(limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn from_u64_limb_shapes() {
        assert!(big(0).is_zero());
        assert_eq!(big(0).bits(), 0);
        assert_eq!(big(1).bits(), 1);
        assert_eq!(big(u64::from(u32::MAX)).bits(), 32);
        assert_eq!(big(1 << 32).bits(), 33);
        assert_eq!(big(u64::MAX).bits(), 64);
    }

    #[test]
    fn from_be_bytes_strips_leading_zeros() {
        assert!(BigUint::from_be_bytes(&[]).is_zero());
        assert!(BigUint::from_be_bytes(&[0, 0, 0]).is_zero());
        assert_eq!(BigUint::from_be_bytes(&[0, 0, 1]), big(1));
        assert_eq!(
            BigUint::from_be_bytes(&[0x12, 0x34, 0x56, 0x78, 0x9a]),
            big(0x12_3456_789a)
        );
    }

    #[test]
    fn from_be_bytes_partial_top_limb() {
        // 5 bytes: one full limb plus a 1-byte top group.
        let value = BigUint::from_be_bytes(&[0x01, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(value, big(1u64 << 32));
        assert_eq!(value.bits(), 33);
    }

    #[test]
    fn to_be_bytes_is_minimal() {
        assert!(big(0).to_be_bytes().is_empty());
        assert_eq!(big(1).to_be_bytes(), vec![1]);
        assert_eq!(big(0x0100).to_be_bytes(), vec![1, 0]);
        assert_eq!(
            big(u64::MAX).to_be_bytes(),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
        let wide = BigUint::from_be_bytes(&[0x7f, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(wide.to_be_bytes(), vec![0x7f, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn bytes_roundtrip_canonical() {
        let samples: [&[u8]; 5] = [
            &[],
            &[0x01],
            &[0xff, 0xfe, 0xfd],
            &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            &[0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad],
        ];
        for bytes in samples {
            let value = BigUint::from_be_bytes(bytes);
            assert_eq!(BigUint::from_be_bytes(&value.to_be_bytes()), value);
        }
    }

    #[test]
    fn compare_u64_limb_cases() {
        assert_eq!(big(0).compare_u64(0), Ordering::Equal);
        assert_eq!(big(0).compare_u64(1), Ordering::Less);
        assert_eq!(big(7).compare_u64(7), Ordering::Equal);
        // one limb vs a value with a high word
        assert_eq!(big(u64::from(u32::MAX)).compare_u64(1 << 32), Ordering::Less);
        // two limbs
        assert_eq!(big(u64::MAX).compare_u64(u64::MAX), Ordering::Equal);
        assert_eq!(big(u64::MAX).compare_u64(u64::MAX - 1), Ordering::Greater);
        // three limbs always win against u64
        let three = &big(u64::MAX) * &big(4);
        assert_eq!(three.compare_u64(u64::MAX), Ordering::Greater);
    }

    #[test]
    fn ord_uses_bits_then_limbs() {
        assert_eq!(big(0).cmp(&big(0)), Ordering::Equal);
        assert!(big(5) < big(9));
        assert!(big(1 << 40) > big(u64::from(u32::MAX)));
        let a = BigUint::from_be_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 1]);
        let b = BigUint::from_be_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 2]);
        assert!(a < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn eq_u64_both_directions() {
        assert!(big(0) == 0u64);
        assert!(big(42) == 42u64);
        assert!(42u64 == big(42));
        assert!(big(42) != 43u64);
        let three = &big(u64::MAX) * &big(u64::MAX);
        assert!(three != 0u64);
        assert!(three != u64::MAX);
    }

    #[test]
    fn mul_u32_shortcuts_and_carries() {
        assert_eq!(&big(123) * 0u32, BigUint::ZERO);
        assert_eq!(&big(123) * 1u32, big(123));
        assert_eq!(&big(1) * 99u32, big(99));
        assert_eq!(&big(u64::from(u32::MAX)) * u32::MAX, big(u64::from(u32::MAX) * u64::from(u32::MAX)));
        // carry across the top limb
        assert_eq!(&big(u64::MAX) * 2u32, BigUint::from_be_bytes(&[1, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]));
    }

    #[test]
    fn mul_big_schoolbook() {
        assert_eq!(&big(0) * &big(123), BigUint::ZERO);
        assert_eq!(&big(1) * &big(123), big(123));
        assert_eq!(&big(123) * &big(1), big(123));
        assert_eq!(&big(1_000_000_007) * &big(998_244_353), big(1_000_000_007 * 998_244_353));
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        let square = &big(u64::MAX) * &big(u64::MAX);
        assert_eq!(
            square.to_be_bytes(),
            vec![
                0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x01
            ]
        );
        assert_eq!(square.bits(), 128);
    }

    #[test]
    fn power_of_10_matches_u64_table() {
        for (k, &expect) in POW10_U64.iter().enumerate() {
            assert_eq!(*BigUint::power_of_10(k as u32), BigUint::from(expect));
        }
    }

    #[test]
    fn power_of_10_is_shareable_across_threads() {
        let handles: Vec<_> = (0..8u32)
            .map(|worker| {
                std::thread::spawn(move || {
                    for exponent in (0..48u32).rev() {
                        let cached = BigUint::power_of_10(exponent + worker % 3);
                        assert!(!cached.is_zero());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker panicked");
        }
    }

    #[test]
    fn power_of_10_extends_past_u64() {
        let p20 = BigUint::power_of_10(20);
        assert_eq!(*p20, &BigUint::from(POW10_U64[19]) * 10u32);
        let p25 = BigUint::power_of_10(25);
        let mut expect = BigUint::from(1);
        for _ in 0..25 {
            expect = &expect * 10u32;
        }
        assert_eq!(*p25, expect);
        // entries are stable: asking again returns the same value
        assert_eq!(BigUint::power_of_10(25), p25);
    }
}
