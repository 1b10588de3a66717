//! printf-style substitution for command templates only known at runtime,
//! such as the ones handed to the flat binding.
//!
//! Supported conversions: `%s`, `%d`, `%i`, `%u`, `%x`, `%c` and `%%`.
//! Length modifiers (`h`, `l`, `ll`, `z`) are accepted and ignored since
//! [`FmtArg`] already carries the width. A negative [`FmtArg::Int`] that fits
//! in 32 bits prints under `%u` and `%x` as a C `int` would, wider values as
//! 64-bit two's complement.
use std::fmt::Write;

use crate::error::{BuildError, Result};

/// One argument for a runtime template.
#[derive(Debug, Clone, PartialEq)]
pub enum FmtArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Char(char),
}

impl From<&str> for FmtArg {
    fn from(s: &str) -> Self {
        FmtArg::Str(s.to_string())
    }
}

impl From<String> for FmtArg {
    fn from(s: String) -> Self {
        FmtArg::Str(s)
    }
}

impl From<i32> for FmtArg {
    fn from(n: i32) -> Self {
        FmtArg::Int(n.into())
    }
}

impl From<i64> for FmtArg {
    fn from(n: i64) -> Self {
        FmtArg::Int(n)
    }
}

impl From<u32> for FmtArg {
    fn from(n: u32) -> Self {
        FmtArg::UInt(n.into())
    }
}

impl From<u64> for FmtArg {
    fn from(n: u64) -> Self {
        FmtArg::UInt(n)
    }
}

impl From<usize> for FmtArg {
    fn from(n: usize) -> Self {
        FmtArg::UInt(n as u64)
    }
}

impl From<char> for FmtArg {
    fn from(c: char) -> Self {
        FmtArg::Char(c)
    }
}

/// Expands `format` with `args`. Extra arguments are ignored.
pub fn sprintf(format: &str, args: &[FmtArg]) -> Result<String> {
    let fail = |reason: String| BuildError::Format {
        format: format.to_string(),
        reason,
    };

    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let mut next_conv = || {
            chars
                .next()
                .ok_or_else(|| fail("dangling '%' at end of format".to_string()))
        };
        let mut conv = next_conv()?;
        if conv == '%' {
            out.push('%');
            continue;
        }
        while matches!(conv, 'h' | 'l' | 'z') {
            conv = next_conv()?;
        }
        let arg = args
            .next()
            .ok_or_else(|| fail(format!("missing argument for '%{}'", conv)))?;
        // writing into a String cannot fail
        let _ = match (conv, arg) {
            ('s', FmtArg::Str(s)) => write!(out, "{}", s),
            ('s', FmtArg::Int(n)) => write!(out, "{}", n),
            ('s', FmtArg::UInt(n)) => write!(out, "{}", n),
            ('s' | 'c', FmtArg::Char(ch)) => write!(out, "{}", ch),
            ('d' | 'i', FmtArg::Int(n)) => write!(out, "{}", n),
            ('d' | 'i' | 'u', FmtArg::UInt(n)) => write!(out, "{}", n),
            ('u', FmtArg::Int(n)) => match i32::try_from(*n) {
                Ok(small) => write!(out, "{}", small as u32),
                Err(_) => write!(out, "{}", *n as u64),
            },
            ('x', FmtArg::Int(n)) => match i32::try_from(*n) {
                Ok(small) => write!(out, "{:x}", small),
                Err(_) => write!(out, "{:x}", *n as u64),
            },
            ('x', FmtArg::UInt(n)) => write!(out, "{:x}", n),
            ('s' | 'd' | 'i' | 'u' | 'x' | 'c', other) => {
                return Err(fail(format!("'%{}' cannot format {:?}", conv, other)))
            }
            (other, _) => return Err(fail(format!("unknown conversion '%{}'", other))),
        };
    }
    Ok(out)
}
