use std::fmt::{self, Debug, Formatter};

/// Writes the held string as-is when debug formatted, without quotes or escapes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adapts a formatting closure into a [`Debug`] value, so that nested output can be produced in
/// place with [`DebugStruct::field`](fmt::DebugStruct::field).
pub struct DebugWith<F>(pub F)
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result;

impl<F> Debug for DebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
