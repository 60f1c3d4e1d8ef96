use std::cmp::Ordering;
use std::fmt;

use crate::Comparison;

/// A complex number ordered by its magnitude.
///
/// The type carries two relations that look at different things:
///
/// 1. Equality (`==`, [`Complex::equals`]) compares both fields, `real` and `imag`.
/// 2. Ordering (`<`, `partial_cmp`, [`Complex::compare`]) compares [`Complex::magnitude`] only.
///
/// So two values with the same magnitude are ordering-equivalent but not
/// equal unless their fields match. Equality must not be built from
/// `compare(..) == Equal`, that would make `1+0i == 0+1i`.
///
/// Since `partial_cmp` may return `Some(Equal)` for values that are not `==`,
/// don't use `Complex` as a key where the two are assumed to agree.
///
/// # Example
/// ```rust
/// use spaceship::{Comparison, Complex};
///
/// let a = Complex::new(1., 0.);
/// let b = Complex::new(0., 1.);
///
/// // same magnitude, so neither sorts before the other
/// assert_eq!(a.compare(&b), Comparison::Equal);
/// assert!(a <= b && a >= b);
///
/// // but the fields differ
/// assert!(a != b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    /// Euclidean norm, `sqrt(real² + imag²)`. NaN if either field is NaN.
    ///
    /// Not `f64::hypot`, so equal sums of squares give bit-identical results.
    ///
    /// # Examples
    /// ```rust
    /// use spaceship::Complex;
    ///
    /// assert_eq!(Complex::new(3., 4.).magnitude(), 5.);
    /// assert!(Complex::new(f64::NAN, 0.).magnitude().is_nan());
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Three-way comparison of magnitudes, `Unordered` when either one is NaN.
    ///
    /// # Examples
    /// ```rust
    /// use spaceship::{Comparison, Complex};
    ///
    /// let a = Complex::new(1., 2.);
    /// assert_eq!(a.compare(&Complex::new(1.5, 1.5)), Comparison::Greater);
    /// assert_eq!(a.compare(&Complex::new(f64::NAN, 0.)), Comparison::Unordered);
    /// ```
    #[inline]
    pub fn compare(&self, other: &Self) -> Comparison {
        self.partial_cmp(other).into()
    }

    /// Field-wise equality, same as `==`.
    ///
    /// # Examples
    /// ```rust
    /// use spaceship::Complex;
    ///
    /// assert!(Complex::new(1., 2.).equals(&Complex::new(1., 2.)));
    /// assert!(!Complex::new(1., 0.).equals(&Complex::new(0., 1.)));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}

// Written out by hand: a derive would be right too, but it has to stay
// field-wise even though `PartialOrd` below is not.
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.imag == other.imag
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }
}

/// `<real>+<imag>i`, the sign of `imag` is printed after the `+`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.real, self.imag)
    }
}
