use num_traits::{One, Zero};
use pyo3::{FromPyObject, IntoPyObject};
use std::fmt;
use std::fmt::Display;
use std::ops;

/// A matrix cell: an exact integer or a float, promoted on contact.
#[derive(Debug, Clone, Copy, FromPyObject, IntoPyObject)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }
}

impl ops::Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a + b),
            (a, b) => Scalar::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl ops::Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a - b),
            (a, b) => Scalar::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl ops::Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a * b),
            (a, b) => Scalar::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl ops::Div for Scalar {
    type Output = Scalar;

    // always a float, like the normalization step that uses it
    fn div(self, rhs: Scalar) -> Scalar {
        Scalar::Float(self.as_f64() / rhs.as_f64())
    }
}

impl ops::Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Int(v) => Scalar::Int(-v),
            Scalar::Float(v) => Scalar::Float(-v),
        }
    }
}

impl One for Scalar {
    fn one() -> Scalar {
        Scalar::Int(1)
    }
}

impl Zero for Scalar {
    fn zero() -> Scalar {
        Scalar::Int(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(v) => *v == 0,
            Scalar::Float(v) => *v == 0.0,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq<Scalar> for Scalar {
    fn eq(&self, rhs: &Scalar) -> bool {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, rhs: &i64) -> bool {
        *self == Scalar::Int(*rhs)
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, rhs: &f64) -> bool {
        *self == Scalar::Float(*rhs)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Scalar {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Scalar {
        Scalar::Float(v)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic_stays_exact() {
        let a = Scalar::Int(1_000_000_007);
        let b = Scalar::Int(998_244_353);

        assert_eq!(a + b, Scalar::Int(1_998_244_360));
        assert_eq!(a - b, Scalar::Int(1_755_654));
        assert_eq!(a * b, Scalar::Int(998_244_359_987_710_471));
        assert_eq!(-a, Scalar::Int(-1_000_000_007));
    }

    #[test]
    fn test_promotion_on_contact() {
        assert_eq!(Scalar::Int(2) + Scalar::Float(0.5), Scalar::Float(2.5));
        assert_eq!(Scalar::Float(3.0) * Scalar::Int(4), Scalar::Float(12.0));
        assert!(matches!(
            Scalar::Int(1) + Scalar::Float(1.0),
            Scalar::Float(_)
        ));
    }

    #[test]
    fn test_div_always_float() {
        assert!(matches!(Scalar::Int(4) / Scalar::Int(2), Scalar::Float(_)));
        assert_eq!(Scalar::Int(4) / Scalar::Int(2), 2.0);
        assert_eq!(Scalar::Int(1) / Scalar::Int(2), 0.5);
    }

    #[test]
    fn test_numeric_equality_across_variants() {
        assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
        assert_ne!(Scalar::Int(2), Scalar::Float(2.5));
        assert_eq!(Scalar::Float(7.0), 7);
        assert_eq!(Scalar::Int(7), 7.0);
    }

    #[test]
    fn test_zero_one() {
        assert!(Scalar::Int(0).is_zero());
        assert!(Scalar::Float(0.0).is_zero());
        assert!(Scalar::Float(-0.0).is_zero());
        assert!(!Scalar::Float(1e-300).is_zero());
        assert!(Scalar::one().is_one());
    }
}
