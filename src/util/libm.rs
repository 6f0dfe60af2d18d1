/*!
A no-std module for the few floating point operations this crate needs.

`trunc` is adapted from the [`libm`] crate. Floating point only shows up at
the edges, when converting dynamic values to integers, so this is all there
is.

[`libm`]: https://github.com/rust-lang/libm
*/

pub(crate) trait Float {
    fn trunc(self) -> Self;
    fn abs(self) -> Self;
}

impl Float for f64 {
    fn trunc(self) -> f64 {
        let x = self;
        let x1p120 = f64::from_bits(0x4770000000000000); // 0x1p120f === 2 ^ 120

        let mut i: u64 = x.to_bits();
        let mut e: i64 = (i >> 52 & 0x7ff) as i64 - 0x3ff + 12;

        if e >= 52 + 12 {
            return x;
        }
        if e < 12 {
            e = 1;
        }
        let m = -1i64 as u64 >> e;
        if (i & m) == 0 {
            return x;
        }
        core::hint::black_box(x + x1p120);
        i &= !m;
        f64::from_bits(i)
    }

    fn abs(self) -> f64 {
        f64::from_bits(self.to_bits() & !(1 << 63))
    }
}

#[cfg(test)]
mod tests {
    use super::Float;

    #[test]
    fn trunc() {
        assert_eq!(Float::trunc(1.9f64), 1.0);
        assert_eq!(Float::trunc(-1.9f64), -1.0);
        assert_eq!(Float::trunc(0.5f64), 0.0);
        assert_eq!(Float::trunc(4.0e15f64 + 0.5), 4.0e15);
        assert_eq!(Float::trunc(f64::INFINITY), f64::INFINITY);
        assert!(Float::trunc(f64::NAN).is_nan());
    }

    #[test]
    fn abs() {
        assert_eq!(Float::abs(-2.5f64), 2.5);
        assert_eq!(Float::abs(2.5f64), 2.5);
        assert_eq!(Float::abs(f64::NEG_INFINITY), f64::INFINITY);
    }
}
