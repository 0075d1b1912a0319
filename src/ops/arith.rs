//! Arithmetic: `Strong ⊕ Strong -> Strong`, re-wrapping `V ⊕ V`.
//!
//! Each operator comes in two shapes:
//! - by value, for `V: Op<Output = V>`;
//! - by reference, for `&V: Op<&V, Output = V>` (handy when `V` is not `Copy`).
//!
//! Compound assignment mutates the left operand's value in place. `%` has no
//! compound form. Division by zero and overflow are whatever `V` does.

use core::ops;

use crate::capability::{Adds, Divides, Modulo, Multiplies, Subtracts};
use crate::strong::{get, get_mut, Strong};

macro_rules! forward_binary {
    ($($cap:ident => $Op:ident :: $op:ident;)*) => {
        $(
            impl<Tag: $cap, V: ops::$Op<Output = V>> ops::$Op for Strong<Tag, V> {
                type Output = Self;

                #[inline(always)]
                fn $op(self, rhs: Self) -> Self {
                    Strong::new(ops::$Op::$op(self.into_inner(), rhs.into_inner()))
                }
            }

            impl<'a, Tag: $cap, V> ops::$Op<&'a Strong<Tag, V>> for &'a Strong<Tag, V>
            where
                &'a V: ops::$Op<&'a V, Output = V>,
            {
                type Output = Strong<Tag, V>;

                #[inline(always)]
                fn $op(self, rhs: &'a Strong<Tag, V>) -> Strong<Tag, V> {
                    Strong::new(ops::$Op::$op(get(self), get(rhs)))
                }
            }
        )*
    };
}

macro_rules! forward_compound {
    ($($cap:ident => $Op:ident :: $op:ident;)*) => {
        paste::paste! {
            $(
                impl<Tag: $cap, V: ops::[<$Op Assign>]> ops::[<$Op Assign>] for Strong<Tag, V> {
                    #[inline(always)]
                    fn [<$op _assign>](&mut self, rhs: Self) {
                        ops::[<$Op Assign>]::[<$op _assign>](get_mut(self), rhs.into_inner());
                    }
                }

                impl<'a, Tag: $cap, V> ops::[<$Op Assign>]<&'a Strong<Tag, V>> for Strong<Tag, V>
                where
                    V: ops::[<$Op Assign>]<&'a V>,
                {
                    #[inline(always)]
                    fn [<$op _assign>](&mut self, rhs: &'a Strong<Tag, V>) {
                        ops::[<$Op Assign>]::[<$op _assign>](get_mut(self), get(rhs));
                    }
                }
            )*
        }
    };
}

forward_binary! {
    Adds => Add::add;
    Subtracts => Sub::sub;
    Multiplies => Mul::mul;
    Divides => Div::div;
    Modulo => Rem::rem;
}

forward_compound! {
    Adds => Add::add;
    Subtracts => Sub::sub;
    Multiplies => Mul::mul;
    Divides => Div::div;
}
