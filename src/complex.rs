use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::{LinalgError, Result};

/// Complex scalar stored in rectangular form.
///
/// Wraps a [`num_complex::Complex64`] and adds parsing from the textual
/// rectangular (`"a ± bi"`) and polar (`"r<θ"`, θ in degrees) notations,
/// a degree-based polar view and a fallible division.
///
/// Equality is exact on both components; there is no tolerance.
///
/// ```
/// use linalg_kernel::Complex;
///
/// let z: Complex = "2 - 9i".parse().unwrap();
/// assert_eq!(z.re(), 2.0);
/// assert_eq!(z.im(), -9.0);
///
/// let w: Complex = "127<30".parse().unwrap();
/// let (r, theta) = w.to_polar();
/// assert!((r - 127.0).abs() < 1e-9);
/// assert!((theta - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex(Complex64);

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Complex = Complex(Complex64::new(0.0, 0.0));
    /// `1 + 0i`.
    pub const ONE: Complex = Complex(Complex64::new(1.0, 0.0));

    /// Create a complex number from its rectangular components.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex(Complex64::new(re, im))
    }

    /// Create a complex number from a magnitude and an angle in degrees.
    ///
    /// ```
    /// use linalg_kernel::Complex;
    /// let z = Complex::from_polar(2.0, 90.0);
    /// assert!(z.re().abs() < 1e-12);
    /// assert!((z.im() - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_polar(magnitude: f64, angle_deg: f64) -> Self {
        Complex(Complex64::from_polar(magnitude, angle_deg.to_radians()))
    }

    /// Real part.
    #[inline]
    pub fn re(&self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    #[inline]
    pub fn im(&self) -> f64 {
        self.0.im
    }

    /// Modulus `sqrt(re² + im²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Argument `atan2(im, re)` in degrees, in `(-180, 180]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.0.arg().to_degrees()
    }

    /// `(magnitude, angle in degrees)`.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.angle())
    }

    /// Complex conjugate.
    #[inline]
    pub fn conj(&self) -> Self {
        Complex(self.0.conj())
    }

    /// `true` when both components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply both components by a real scalar.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        Complex(self.0.scale(k))
    }

    /// `a + b`.
    pub fn sum(a: Complex, b: Complex) -> Complex {
        a + b
    }

    /// `a - b`.
    pub fn subtraction(a: Complex, b: Complex) -> Complex {
        a - b
    }

    /// `a * b`.
    pub fn multiply(a: Complex, b: Complex) -> Complex {
        a * b
    }

    /// `a / b`, failing with [`LinalgError::DivisionByZero`] when `b` has zero
    /// magnitude.
    ///
    /// ```
    /// use linalg_kernel::{Complex, LinalgError};
    ///
    /// let a: Complex = "5.0<45.0".parse().unwrap();
    /// let b: Complex = "2.0<30.0".parse().unwrap();
    /// let (r, theta) = Complex::divide(a, b).unwrap().to_polar();
    /// assert!((r - 2.5).abs() < 1e-9);
    /// assert!((theta - 15.0).abs() < 1e-9);
    ///
    /// assert_eq!(Complex::divide(a, Complex::ZERO), Err(LinalgError::DivisionByZero));
    /// ```
    pub fn divide(a: Complex, b: Complex) -> Result<Complex> {
        if b.0.norm_sqr() == 0.0 {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Complex(a.0 / b.0))
    }

    /// The wrapped `num_complex` value.
    #[inline]
    pub fn into_inner(self) -> Complex64 {
        self.0
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<Complex64> for Complex {
    #[inline]
    fn from(z: Complex64) -> Self {
        Complex(z)
    }
}

impl From<Complex> for Complex64 {
    #[inline]
    fn from(z: Complex) -> Self {
        z.0
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex(self.0 * rhs.0)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

impl FromStr for Complex {
    type Err = LinalgError;

    /// Parse `"a ± bi"` (rectangular) or `"r<θ"` (polar, θ in degrees).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LinalgError::InvalidInput("empty complex literal"));
        }
        if let Some((r, theta)) = s.split_once('<') {
            return Ok(Complex::from_polar(parse_number(r)?, parse_number(theta)?));
        }
        parse_rectangular(s)
    }
}

fn parse_number(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| LinalgError::InvalidInput("malformed number in complex literal"))
}

fn parse_rectangular(s: &str) -> Result<Complex> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = compact.as_bytes();

    // Last sign that separates the real and imaginary terms; a leading sign
    // or an exponent sign (`1e-3`) is part of a number instead.
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

    match split {
        Some(i) => {
            let re = parse_number(&compact[..i])?;
            let im = parse_imaginary(&compact[i..])?;
            Ok(Complex::new(re, im))
        }
        None if compact.ends_with('i') => Ok(Complex::new(0.0, parse_imaginary(&compact)?)),
        None => Ok(Complex::new(parse_number(&compact)?, 0.0)),
    }
}

fn parse_imaginary(term: &str) -> Result<f64> {
    let coeff = term
        .strip_suffix('i')
        .ok_or(LinalgError::InvalidInput("imaginary term must end with 'i'"))?;
    match coeff {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        c => parse_number(c),
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im() < 0.0 { '-' } else { '+' };
        let im = self.im().abs();
        match f.precision() {
            Some(p) => write!(f, "{:.*} {} {:.*}i", p, self.re(), sign, p, im),
            None => write!(f, "{} {} {}i", self.re(), sign, im),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    #[test]
    fn parse_rectangular_forms() {
        assert_eq!("2 - 9i".parse::<Complex>().unwrap(), Complex::new(2.0, -9.0));
        assert_eq!("3+4i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("-1.5 + 0.5i".parse::<Complex>().unwrap(), Complex::new(-1.5, 0.5));
        assert_eq!("7".parse::<Complex>().unwrap(), Complex::new(7.0, 0.0));
        assert_eq!("-2i".parse::<Complex>().unwrap(), Complex::new(0.0, -2.0));
        assert_eq!("i".parse::<Complex>().unwrap(), Complex::new(0.0, 1.0));
        assert_eq!("4 - i".parse::<Complex>().unwrap(), Complex::new(4.0, -1.0));
        assert_eq!("1e-3 + 2e2i".parse::<Complex>().unwrap(), Complex::new(1e-3, 200.0));
    }

    #[test]
    fn parse_polar() {
        let z: Complex = "127<30".parse().unwrap();
        assert_near(z.magnitude(), 127.0, TOL, "magnitude");
        assert_near(z.angle(), 30.0, TOL, "angle");
        assert_near(z.re(), 127.0 * 30.0_f64.to_radians().cos(), TOL, "re");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("".parse::<Complex>(), Err(LinalgError::InvalidInput(_))));
        assert!(matches!("abc".parse::<Complex>(), Err(LinalgError::InvalidInput(_))));
        assert!(matches!("1 + 2".parse::<Complex>(), Err(LinalgError::InvalidInput(_))));
        assert!(matches!("3<".parse::<Complex>(), Err(LinalgError::InvalidInput(_))));
    }

    #[test]
    fn arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(Complex::sum(a, b), Complex::new(4.0, 1.0));
        assert_eq!(Complex::subtraction(a, b), Complex::new(-2.0, 3.0));
        // (1+2i)(3-i) = 3 - i + 6i - 2i² = 5 + 5i
        assert_eq!(Complex::multiply(a, b), Complex::new(5.0, 5.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
    }

    #[test]
    fn divide_polar() {
        let a: Complex = "5.0<45.0".parse().unwrap();
        let b: Complex = "2.0<30.0".parse().unwrap();
        let q = Complex::divide(a, b).unwrap();
        assert_near(q.magnitude(), 2.5, TOL, "magnitude");
        assert_near(q.angle(), 15.0, TOL, "angle");
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(
            Complex::divide(Complex::ONE, Complex::ZERO),
            Err(LinalgError::DivisionByZero)
        );
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(Complex::new(1.0, 0.0), Complex::new(1.0, 1e-300));
        assert_eq!(Complex::new(0.5, -0.5), Complex::new(0.5, -0.5));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Complex::new(2.0, -9.0)), "2 - 9i");
        assert_eq!(format!("{:.3}", Complex::new(1.0, 0.25)), "1.000 + 0.250i");
    }

    #[test]
    fn conj_and_polar() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.conj(), Complex::new(3.0, -4.0));
        let (r, _) = z.to_polar();
        assert_near(r, 5.0, TOL, "magnitude");
    }
}
