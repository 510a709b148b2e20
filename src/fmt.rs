//! Wire-style rendering for record debug output.
//!
//! Records render as `{Name: value,Name: value}` with absent fields left out
//! entirely and field order matching declaration order. An empty record
//! renders as `{}`.

use std::collections::BTreeMap;
use std::fmt;

/// How a field value appears inside a record's debug rendering. Strings are
/// written bare (no quotes), lists as `[a, b]`, maps as `{k: v}`.
pub trait WireDisplay {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

impl WireDisplay for String {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self)
    }
}

impl WireDisplay for bool {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl WireDisplay for i32 {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl WireDisplay for i64 {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: WireDisplay> WireDisplay for Vec<T> {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.wire_fmt(f)?;
        }
        f.write_str("]")
    }
}

impl<T: WireDisplay> WireDisplay for BTreeMap<String, T> {
    fn wire_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", key)?;
            value.wire_fmt(f)?;
        }
        f.write_str("}")
    }
}

/// Incremental writer behind every generated `Debug` impl. Fields are pushed
/// in declaration order; absent ones are skipped.
pub struct RecordWriter<'a, 'f: 'a> {
    f: &'a mut fmt::Formatter<'f>,
    any: bool,
}

impl<'a, 'f> RecordWriter<'a, 'f> {
    pub fn new(f: &'a mut fmt::Formatter<'f>) -> Self {
        RecordWriter { f, any: false }
    }

    pub fn field<T: WireDisplay>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        if let Some(value) = value {
            if self.any {
                self.f.write_str(",")?;
            } else {
                self.f.write_str("{")?;
                self.any = true;
            }
            write!(self.f, "{}: ", name)?;
            value.wire_fmt(self.f)?;
        }
        Ok(())
    }

    pub fn finish(self) -> fmt::Result {
        if self.any {
            self.f.write_str("}")
        } else {
            self.f.write_str("{}")
        }
    }
}
