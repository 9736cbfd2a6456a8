//! Operation port - argument forwarding for looped callables.
//!
//! A looped operation is any `FnMut` taking between zero and six arguments.
//! Arguments are passed as a tuple and cloned for each attempt, so every call
//! sees the same values in the same order.
//!
//! ```ignore
//! let mut probe = TimedLoop::new(|a: i32, b: &str| a == 1 && b == "two");
//! probe.call((1, "two"))?;
//! ```

/// Something the loop can call repeatedly with the same arguments.
pub trait Operation<Args> {
    type Output;

    fn call_with(&mut self, args: &Args) -> Self::Output;
}

macro_rules! impl_operation {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg: Clone,)*> Operation<($($arg,)*)> for Func
        where
            Func: FnMut($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case, clippy::unused_unit)]
            fn call_with(&mut self, args: &($($arg,)*)) -> Out {
                let ($($arg,)*) = args;
                (self)($($arg.clone()),*)
            }
        }
    };
}

impl_operation!();
impl_operation!(A1);
impl_operation!(A1, A2);
impl_operation!(A1, A2, A3);
impl_operation!(A1, A2, A3, A4);
impl_operation!(A1, A2, A3, A4, A5);
impl_operation!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arguments() {
        let mut calls = 0;
        let mut op = || {
            calls += 1;
            calls
        };
        assert_eq!(op.call_with(&()), 1);
        assert_eq!(op.call_with(&()), 2);
    }

    #[test]
    fn arguments_are_forwarded_in_order() {
        let mut op = |a: i32, b: &str, c: String| format!("{a}-{b}-{c}");
        let args = (1, "two", "###".to_string());
        assert_eq!(op.call_with(&args), "1-two-###");
        assert_eq!(op.call_with(&args), "1-two-###");
    }

    #[test]
    fn owned_arguments_are_cloned_per_call() {
        let mut seen = Vec::new();
        let mut op = |mut v: Vec<u8>| {
            v.push(0);
            seen.push(v.len());
        };
        let args = (vec![1, 2, 3],);
        op.call_with(&args);
        op.call_with(&args);
        assert_eq!(seen, vec![4, 4]);
        assert_eq!(args.0, vec![1, 2, 3]);
    }
}
