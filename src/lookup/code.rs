/// A SIC code as supplied by a caller, before normalization
///
/// Callers pass numbers or text; every query converts its argument
/// through [`CodeInput::normalize`] and treats `None` as "no match".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodeInput<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl CodeInput<'_> {
    /// Canonical integer value of the input.
    ///
    /// - integers are used as-is
    /// - floats are truncated toward zero; NaN, infinities and values
    ///   outside the `i64` range give `None`
    /// - text is trimmed and must parse as a base-10 integer; leading
    ///   zeros are absorbed ("0100" is 100)
    pub fn normalize(&self) -> Option<i64> {
        match *self {
            CodeInput::Integer(n) => Some(n),
            CodeInput::Float(f) => truncate_float(f),
            CodeInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }

    /// Canonical decimal string used for prefix matching
    pub fn canonical(&self) -> Option<String> {
        self.normalize().map(|n| n.to_string())
    }
}

fn truncate_float(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range
    if t < i64::MIN as f64 || t >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(t as i64)
}

impl From<i64> for CodeInput<'_> {
    fn from(n: i64) -> Self {
        CodeInput::Integer(n)
    }
}

impl From<i32> for CodeInput<'_> {
    fn from(n: i32) -> Self {
        CodeInput::Integer(n.into())
    }
}

impl From<u32> for CodeInput<'_> {
    fn from(n: u32) -> Self {
        CodeInput::Integer(n.into())
    }
}

impl From<u16> for CodeInput<'_> {
    fn from(n: u16) -> Self {
        CodeInput::Integer(n.into())
    }
}

impl From<f64> for CodeInput<'_> {
    fn from(f: f64) -> Self {
        CodeInput::Float(f)
    }
}

impl From<f32> for CodeInput<'_> {
    fn from(f: f32) -> Self {
        CodeInput::Float(f.into())
    }
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(s: &'a str) -> Self {
        CodeInput::Text(s)
    }
}

impl<'a> From<&'a String> for CodeInput<'a> {
    fn from(s: &'a String) -> Self {
        CodeInput::Text(s.as_str())
    }
}
