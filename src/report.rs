use std::fmt;
use std::io;

use crate::{Comparison, Complex};

/// Result of running both relations on a pair of values.
///
/// Renders as a leading blank line, the equality line and the ordering line:
///
/// ```text
///
/// 1+0i ==  0+1i : 0
/// 1+0i <=> 0+1i : <0|1|0>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub lhs: Complex,
    pub rhs: Complex,
    /// field-wise equality
    pub equal: bool,
    /// ordering by magnitude
    pub ordering: Comparison,
}

impl Report {
    /// Evaluate `equals` and `compare` once each.
    ///
    /// # Examples
    /// ```rust
    /// use spaceship::{Comparison, Complex, Report};
    ///
    /// let report = Report::new(Complex::new(1., 0.), Complex::new(0., 1.));
    /// assert!(!report.equal);
    /// assert_eq!(report.ordering, Comparison::Equal);
    /// ```
    pub fn new(lhs: Complex, rhs: Complex) -> Self {
        Self {
            lhs,
            rhs,
            equal: lhs.equals(&rhs),
            ordering: lhs.compare(&rhs),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "{} ==  {} : {}",
            self.lhs,
            self.rhs,
            u8::from(self.equal)
        )?;
        writeln!(f, "{} <=> {} : {}", self.lhs, self.rhs, self.ordering)
    }
}

/// Compare `lhs` with `rhs` and write the report to `out`.
///
/// # Examples
/// ```rust
/// use spaceship::{compare_and_report, Complex};
///
/// let mut out = Vec::new();
/// compare_and_report(&mut out, Complex::new(3., 4.), Complex::new(5., 0.)).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "\n3+4i ==  5+0i : 0\n3+4i <=> 5+0i : <0|1|0>\n"
/// );
/// ```
pub fn compare_and_report<W: io::Write>(
    out: &mut W,
    lhs: Complex,
    rhs: Complex,
) -> io::Result<Report> {
    let report = Report::new(lhs, rhs);

    tracing::debug!(
        lhs = %report.lhs,
        rhs = %report.rhs,
        lhs_magnitude = report.lhs.magnitude(),
        rhs_magnitude = report.rhs.magnitude(),
        equal = report.equal,
        ordering = report.ordering.token(),
        "compared"
    );

    write!(out, "{report}")?;
    Ok(report)
}
