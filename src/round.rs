use crate::error::{options, Error};

/// The policy for collapsing a fractional unit difference to an integer.
///
/// This is used by the `difference_in_*` methods on
/// [`Calendar`](crate::Calendar) that compute a quotient of two durations,
/// like [`Calendar::difference_in_weeks`](crate::Calendar::difference_in_weeks).
///
/// # Example
///
/// ```
/// use jalali::{Calendar, RoundingMethod, Timestamp};
///
/// let cal = Calendar::UTC;
/// let a = Timestamp::from_gregorian(2012, 7, 2, 18, 0, 0, 0);
/// let b = Timestamp::from_gregorian(2011, 5, 2, 6, 0, 0, 0);
/// assert_eq!(cal.difference_in_quarters(a, b, RoundingMethod::Trunc), Some(4));
/// assert_eq!(cal.difference_in_quarters(a, b, RoundingMethod::Ceil), Some(5));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum RoundingMethod {
    /// Rounds toward zero, chopping off any fractional part.
    ///
    /// This is the default.
    #[default]
    Trunc,
    /// Rounds to the nearest integer. Ties round toward positive infinity,
    /// so `-2.5` rounds to `-2`.
    Round,
    /// Rounds toward positive infinity.
    Ceil,
    /// Rounds toward negative infinity.
    Floor,
}

impl RoundingMethod {
    /// Divides `numerator` by `denominator` and rounds the quotient
    /// according to this method.
    ///
    /// `denominator` must be positive. Every caller divides by a fixed unit
    /// length.
    pub(crate) fn round(self, numerator: i64, denominator: i64) -> i64 {
        debug_assert!(denominator > 0, "denominator must be positive");
        let mut quotient = numerator / denominator;
        let remainder = numerator % denominator;
        if remainder == 0 {
            return quotient;
        }
        let sign = remainder.signum();
        // Compared in i128 so that doubling can't overflow.
        let doubled = 2 * i128::from(remainder).abs();
        let denominator = i128::from(denominator);
        match self {
            RoundingMethod::Trunc => {}
            RoundingMethod::Ceil => {
                if sign > 0 {
                    quotient += sign;
                }
            }
            RoundingMethod::Floor => {
                if sign < 0 {
                    quotient += sign;
                }
            }
            RoundingMethod::Round => {
                if doubled > denominator || (doubled == denominator && sign > 0)
                {
                    quotient += sign;
                }
            }
        }
        quotient
    }

    /// Returns the name of this method as used in option objects.
    pub fn as_str(&self) -> &'static str {
        match *self {
            RoundingMethod::Trunc => "trunc",
            RoundingMethod::Round => "round",
            RoundingMethod::Ceil => "ceil",
            RoundingMethod::Floor => "floor",
        }
    }
}

impl core::fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a rounding method from its lowercase name.
///
/// # Example
///
/// ```
/// use jalali::RoundingMethod;
///
/// assert_eq!("ceil".parse::<RoundingMethod>()?, RoundingMethod::Ceil);
/// assert!("half-even".parse::<RoundingMethod>().unwrap_err().is_range());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl core::str::FromStr for RoundingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<RoundingMethod, Error> {
        let method = match s {
            "trunc" => RoundingMethod::Trunc,
            "round" => RoundingMethod::Round,
            "ceil" => RoundingMethod::Ceil,
            "floor" => RoundingMethod::Floor,
            _ => return Err(options::Error::UnknownRoundingMethod.into()),
        };
        Ok(method)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RoundingMethod {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RoundingMethod {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<RoundingMethod, D::Error> {
        use serde::de;

        struct RoundingMethodVisitor;

        impl<'de> de::Visitor<'de> for RoundingMethodVisitor {
            type Value = RoundingMethod;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("one of 'trunc', 'round', 'ceil' or 'floor'")
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<RoundingMethod, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(RoundingMethodVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for RoundingMethod {
    fn arbitrary(g: &mut quickcheck::Gen) -> RoundingMethod {
        *g.choose(&[
            RoundingMethod::Trunc,
            RoundingMethod::Round,
            RoundingMethod::Ceil,
            RoundingMethod::Floor,
        ])
        .unwrap()
    }
}
