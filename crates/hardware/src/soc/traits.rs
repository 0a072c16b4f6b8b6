//! Console trait for program output.
//!
//! `PRN` is the only output instruction. The CPU writes every printed value
//! through a `Console` so callers can route output to stdout, a buffer, or
//! anything else.

/// Sink for values printed by `PRN`.
///
/// Implementations must emit each value before returning so that output
/// order always matches instruction order.
pub trait Console {
    /// Emits one printed register value.
    fn print_value(&mut self, value: u8) -> std::io::Result<()>;
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn print_value(&mut self, value: u8) -> std::io::Result<()> {
        (**self).print_value(value)
    }
}
