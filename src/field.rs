//! Fixed-column field extraction and numeric decoding.
//!
//! RINEX lines are made of fixed-width fields. Real numbers are written with
//! Fortran edit descriptors (`D19.12`, `D12.4`, `F5.1`), which may use `D`
//! as the exponent marker.
use std::num::IntErrorKind;

use thiserror::Error;

/// Field decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field holds no data while a value is required
    #[error("blank field")]
    Blank,
    /// Field does not hold a valid numeric literal
    #[error("invalid numeric literal \"{0}\"")]
    Syntax(String),
    /// Literal overflows (or underflows) the target type
    #[error("numeric value out of range \"{0}\"")]
    Range(String),
    /// Well formed value this reader does not handle
    #[error("unsupported value \"{0}\"")]
    Unsupported(String),
}

/// Returns the span of `len` bytes starting at `offset`, with surrounding
/// spaces removed. A line shorter than `offset` yields an empty string,
/// a line shorter than `offset + len` yields whatever remains.
pub fn substr_trimmed(line: &str, offset: usize, len: usize) -> &str {
    substr(line, offset, len).trim_matches(' ')
}

/// Returns the raw span of `len` bytes starting at `offset`.
/// Bounds that fall inside a multi-byte character are moved inward.
pub fn substr(line: &str, offset: usize, len: usize) -> &str {
    if offset >= line.len() {
        return "";
    }
    let mut start = offset;
    while !line.is_char_boundary(start) {
        start += 1;
    }
    let mut end = offset.saturating_add(len).min(line.len());
    while end > start && !line.is_char_boundary(end) {
        end -= 1;
    }
    if end <= start {
        return "";
    }
    &line[start..end]
}

/// Replaces a Fortran exponent marker (`D` or `d`, immediately followed by
/// an optionally signed integer at the end of the literal) with `E`.
fn replace_fortran_exponent(s: &str) -> std::borrow::Cow<'_, str> {
    let bytes = s.as_bytes();
    let mut i = bytes.len();
    while i > 0 && bytes[i - 1].is_ascii_digit() {
        i -= 1;
    }
    if i > 0 && (bytes[i - 1] == b'+' || bytes[i - 1] == b'-') {
        i -= 1;
    }
    if i > 0 && (bytes[i - 1] == b'D' || bytes[i - 1] == b'd') {
        let mut owned = s.to_string();
        owned.replace_range(i - 1..i, "E");
        owned.into()
    } else {
        s.into()
    }
}

/// Parses a Fortran real literal such as `-.123456789012D-04`.
/// The literal must carry a decimal point, as every Fortran real
/// edit descriptor emits one.
pub fn parse_fortran_double(s: &str) -> Result<f64, FieldError> {
    let s = s.trim_matches(' ');
    if s.is_empty() {
        return Err(FieldError::Blank);
    }

    let literal = replace_fortran_exponent(s);
    let (mantissa, _) = literal
        .split_once(|c: char| c == 'e' || c == 'E')
        .unwrap_or((&literal, ""));

    let unsigned = mantissa.trim_start_matches(|c: char| c == '+' || c == '-');
    if !unsigned.contains('.') || !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return Err(FieldError::Syntax(s.to_string()));
    }
    if !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(FieldError::Syntax(s.to_string()));
    }

    let value = literal
        .parse::<f64>()
        .map_err(|_| FieldError::Syntax(s.to_string()))?;

    if value.is_infinite() {
        return Err(FieldError::Range(s.to_string()));
    }
    if value == 0.0 && unsigned.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        // non null mantissa rounded to zero
        return Err(FieldError::Range(s.to_string()));
    }
    if value != 0.0 && value.abs() < f64::MIN_POSITIVE {
        // subnormal
        return Err(FieldError::Range(s.to_string()));
    }
    Ok(value)
}

/// Same as [parse_fortran_double], a blank field being returned as `None`
pub fn parse_optional_double(s: &str) -> Result<Option<f64>, FieldError> {
    if s.trim_matches(' ').is_empty() {
        Ok(None)
    } else {
        parse_fortran_double(s).map(Some)
    }
}

/// Parses a base 10 integer that must fit in 32 bits
pub fn parse_int(s: &str) -> Result<i32, FieldError> {
    let s = s.trim_matches(' ');
    if s.is_empty() {
        return Err(FieldError::Blank);
    }
    s.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            FieldError::Range(s.to_string())
        },
        _ => FieldError::Syntax(s.to_string()),
    })
}

/// Field decoding failure, tied to the name of the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodingError {
    pub field: &'static str,
    pub source: FieldError,
}

/// Column cursor over one line, used by the record decoders
pub(crate) struct Columns<'a> {
    line: &'a str,
}

impl<'a> Columns<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    /// Trimmed text content
    pub fn text(&self, offset: usize, len: usize) -> &'a str {
        substr_trimmed(self.line, offset, len)
    }

    /// Text content with trailing spaces removed only
    pub fn text_right_trimmed(&self, offset: usize, len: usize) -> &'a str {
        substr(self.line, offset, len).trim_end_matches(' ')
    }

    /// Single character field, `None` when blank
    pub fn char(&self, offset: usize) -> Option<char> {
        self.text(offset, 1).chars().next()
    }

    pub fn f64(&self, field: &'static str, offset: usize, len: usize) -> Result<f64, DecodingError> {
        parse_fortran_double(self.text(offset, len)).map_err(|source| DecodingError { field, source })
    }

    pub fn opt_f64(
        &self,
        field: &'static str,
        offset: usize,
        len: usize,
    ) -> Result<Option<f64>, DecodingError> {
        parse_optional_double(self.text(offset, len))
            .map_err(|source| DecodingError { field, source })
    }

    pub fn i32(&self, field: &'static str, offset: usize, len: usize) -> Result<i32, DecodingError> {
        parse_int(self.text(offset, len)).map_err(|source| DecodingError { field, source })
    }

    /// Four consecutive reals of identical width
    pub fn f64x4(
        &self,
        fields: [&'static str; 4],
        offset: usize,
        width: usize,
    ) -> Result<[f64; 4], DecodingError> {
        let mut values = [0.0_f64; 4];
        for (i, (value, field)) in values.iter_mut().zip(fields).enumerate() {
            *value = self.f64(field, offset + i * width, width)?;
        }
        Ok(values)
    }
}
