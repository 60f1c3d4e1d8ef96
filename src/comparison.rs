use std::cmp::Ordering;
use std::fmt;

/// Outcome of a partial three-way comparison.
///
/// `Unordered` is a result in its own right, produced when one side has no
/// place in the order (a NaN key). It is never folded into one of the other
/// three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl Comparison {
    /// true if the left side sorts before the right side
    #[inline]
    pub fn is_lt(&self) -> bool {
        matches!(self, Comparison::Less)
    }

    /// true if both sides hold the same position in the order
    #[inline]
    pub fn is_eq(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    /// true if the left side sorts after the right side
    #[inline]
    pub fn is_gt(&self) -> bool {
        matches!(self, Comparison::Greater)
    }

    #[inline]
    pub fn is_unordered(&self) -> bool {
        matches!(self, Comparison::Unordered)
    }

    /// Swap sides. `Less` and `Greater` trade places, the rest stay.
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::Greater => Comparison::Less,
            other => other,
        }
    }

    /// Name of the outcome
    ///
    /// # Examples
    /// ```rust
    /// use spaceship::Comparison;
    ///
    /// assert_eq!(Comparison::Unordered.token(), "unordered");
    /// ```
    pub fn token(&self) -> &'static str {
        match self {
            Comparison::Less => "less",
            Comparison::Equal => "equal",
            Comparison::Greater => "greater",
            Comparison::Unordered => "unordered",
        }
    }
}

impl From<Option<Ordering>> for Comparison {
    fn from(ord: Option<Ordering>) -> Self {
        match ord {
            Some(Ordering::Less) => Comparison::Less,
            Some(Ordering::Equal) => Comparison::Equal,
            Some(Ordering::Greater) => Comparison::Greater,
            None => Comparison::Unordered,
        }
    }
}

impl From<Comparison> for Option<Ordering> {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Unordered => None,
        }
    }
}

/// Renders the three facets as `<is_lt|is_eq|is_gt>`, each `0` or `1`.
///
/// # Examples
/// ```rust
/// use spaceship::Comparison;
///
/// assert_eq!(Comparison::Greater.to_string(), "<0|0|1>");
/// assert_eq!(Comparison::Unordered.to_string(), "<0|0|0>");
/// ```
impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}|{}|{}>",
            u8::from(self.is_lt()),
            u8::from(self.is_eq()),
            u8::from(self.is_gt())
        )
    }
}
