//! The [`format`](self) module contains helpers to render a call of a mocked
//! method as human readable text.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use crate::Method;

/// Create a [`CallFormat`] that renders `method` with `count` arguments. Each
/// argument is written by `format_arg`, which gets the position of the
/// argument.
pub fn format_call<F>(method: &Method, count: usize, format_arg: F) -> CallFormat<'_, F>
where
    F: Fn(&mut Formatter<'_>, usize) -> FmtResult,
{
    CallFormat {
        method,
        count,
        format_arg,
    }
}

/// Lazily rendered representation of a method call: `Type::method(a0, a1, ...)`.
pub struct CallFormat<'a, F> {
    method: &'a Method,
    count: usize,
    format_arg: F,
}

impl<F> Display for CallFormat<'_, F>
where
    F: Fn(&mut Formatter<'_>, usize) -> FmtResult,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "{}(", self.method)?;

        for index in 0..self.count {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            (self.format_arg)(f, index)?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::Method;

    use super::format_call;

    #[test]
    fn renders_arguments_in_order() {
        let method = Method::new("MyStruct", "fuu")
            .with_param("a", "i32")
            .with_param("b", "i32");
        let text = format_call(&method, 2, |f, i| write!(f, "arg{i}")).to_string();

        assert_eq!(text, "MyStruct::fuu(arg0, arg1)");
    }

    #[test]
    fn renders_empty_list() {
        let method = Method::new("MyStruct", "fuu");
        let text = format_call(&method, 0, |_, _| unreachable!()).to_string();

        assert_eq!(text, "MyStruct::fuu()");
    }
}
