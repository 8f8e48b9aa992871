/// Implements `$imp` / `$imp_assign` for every owned and borrowed operand
/// combination on top of `$func: fn(&BigInt, &BigInt) -> BigInt`.
macro_rules! impl_binop_by_ref {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $func: path) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                $func(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = $func(&*self, &rhs);
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = $func(&*self, rhs);
            }
        }
    };
}

/// Shift operators consume their left operand, so the borrowed forms clone it.
/// `$func: fn(BigInt, &BigInt) -> BigInt`.
macro_rules! impl_shift {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $func: path) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, n: BigInt) -> Self::Output {
                $func(self, &n)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, n: &BigInt) -> Self::Output {
                $func(self, n)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, n: BigInt) -> Self::Output {
                $func(self.clone(), &n)
            }
        }

        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, n: &BigInt) -> Self::Output {
                $func(self.clone(), n)
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, n: BigInt) {
                *self = $func(std::mem::take(self), &n);
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, n: &BigInt) {
                *self = $func(std::mem::take(self), n);
            }
        }
    };
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $func: path; $($t: ty),*) => {
    $(
        impl $imp<$t> for BigInt {
            type Output = BigInt;

            fn $method(self, n: $t) -> Self::Output {
                $func(self, &BigInt::from(n))
            }
        }

        impl $imp<$t> for &BigInt {
            type Output = BigInt;

            fn $method(self, n: $t) -> Self::Output {
                $func(self.clone(), &BigInt::from(n))
            }
        }

        impl $imp_assign<$t> for BigInt {
            fn $method_assign(&mut self, n: $t) {
                *self = $func(std::mem::take(self), &BigInt::from(n));
            }
        }
    )*
    };
}
