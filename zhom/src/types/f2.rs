use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub, Mul, AddAssign, SubAssign, MulAssign};
use num_integer::Integer;
use num_traits::{One, Zero};
use auto_impl_ops::auto_ops;

/// An element of the two-element field. 
/// 
/// Addition is XOR and multiplication is AND, so no arithmetic 
/// on the underlying representation can ever widen or overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FF2(bool);

impl FF2 { 
    pub fn math_symbol() -> String {
        String::from("F₂")
    }

    pub fn as_u8(&self) -> u8 { 
        self.0 as u8
    }
}

impl From<bool> for FF2 {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for FF2 {
            fn from(a: $t) -> Self {
                Self(a.is_odd())
            }
        }
    )*};
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<FF2> for bool {
    fn from(a: FF2) -> Self {
        a.0
    }
}

impl From<FF2> for u8 {
    fn from(a: FF2) -> Self {
        a.as_u8()
    }
}

impl Display for FF2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 { 
            write!(f, "1")
        } else { 
            write!(f, "0")
        }
    }
}

impl Debug for FF2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for FF2 {
    fn zero() -> Self {
        Self(false)
    }

    fn is_zero(&self) -> bool {
        !self.0
    }
}

impl One for FF2 {
    fn one() -> Self {
        Self(true)
    }

    fn is_one(&self) -> bool {
        self.0
    }
}

impl Neg for FF2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self
    }
}

impl Neg for &FF2 {
    type Output = FF2;
    fn neg(self) -> Self::Output {
        *self
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b FF2> for &'a FF2 {
    type Output = FF2;
    fn add(self, rhs: &'b FF2) -> Self::Output {
        FF2(self.0 ^ rhs.0)
    }
}

#[auto_ops]
impl<'a, 'b> Sub<&'b FF2> for &'a FF2 {
    type Output = FF2;
    fn sub(self, rhs: &'b FF2) -> Self::Output {
        Add::add(self, rhs)
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b FF2> for &'a FF2 {
    type Output = FF2;
    fn mul(self, rhs: &'b FF2) -> Self::Output {
        FF2(self.0 && rhs.0)
    }
}

impl std::iter::Sum for FF2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FF2::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn init() { 
        let a = FF2::from(0);
        assert_eq!(a.0, false);

        let a = FF2::from(1);
        assert_eq!(a.0, true);

        let a = FF2::from(2);
        assert_eq!(a.0, false);

        let a = FF2::from(-3);
        assert_eq!(a.0, true);

        let a = FF2::from(true);
        assert_eq!(a, FF2::one());
    }

    #[test]
    fn display() { 
        let a = FF2::zero();
        assert_eq!(a.to_string(), "0");

        let a = FF2::one();
        assert_eq!(a.to_string(), "1");

        let a = FF2::from(2);
        assert_eq!(a.to_string(), "0");
    }

    #[test]
    fn add() { 
        let a = FF2::from(2);
        let b = FF2::from(4);
        assert_eq!(a + b, FF2::from(0));

        let a = FF2::from(3);
        let b = FF2::from(4);
        assert_eq!(a + b, FF2::from(1));

        let a = FF2::from(3);
        let b = FF2::from(5);
        assert_eq!(a + b, FF2::from(0));
    }

    #[test]
    fn add_assign() { 
        let mut a = FF2::from(3);
        a += FF2::from(4);
        assert_eq!(a, FF2::from(1));

        a += FF2::from(1);
        assert_eq!(a, FF2::from(0));
    }

    #[test]
    fn neg() { 
        let a = FF2::from(3);
        assert_eq!(-a, FF2::from(1));
    }

    #[test]
    fn sub() { 
        let a = FF2::from(3);
        let b = FF2::from(5);
        assert_eq!(a - b, FF2::from(0));
    }

    #[test]
    fn mul() { 
        let a = FF2::from(3);
        let b = FF2::from(4);
        assert_eq!(a * b, FF2::from(0));

        let a = FF2::from(1);
        let b = FF2::from(5);
        assert_eq!(a * b, FF2::from(1));
    }

    #[test]
    fn mul_assign() { 
        let mut a = FF2::from(3);
        a *= FF2::from(4);
        assert_eq!(a, FF2::from(0));
    }

    #[test]
    fn sum() { 
        let s: FF2 = [1, 1, 1].into_iter().map(FF2::from).sum();
        assert_eq!(s, FF2::one());

        let s: FF2 = [1, 0, 1].into_iter().map(FF2::from).sum();
        assert_eq!(s, FF2::zero());
    }
}
