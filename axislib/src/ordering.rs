//! Signed axis orderings and their textual specifiers.
//!
//! A specifier is a comma-separated list of axis indices, each optionally
//! prefixed with `+` or `-`, e.g. `"0,-1,2"`. Indices are zero-based in text
//! but stored one-based, so that the sign of every entry (including the
//! first axis) is representable: `"0,-1,2"` decodes to `[1, -2, 3]`.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::{ArrayBase, Axis, ErrorKind, IxDyn, RawData, ShapeError};

use crate::error::{OrderingError, ParseError};

/// A validated signed permutation of `1..=ndim`.
///
/// Entry `n` names the source axis placed at position `n`: `k > 0` is source
/// axis `k - 1` traversed forward, `-k` the same axis traversed in reverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<isize>", into = "Vec<isize>"))]
pub struct AxisOrdering {
    values: Vec<isize>,
}

impl AxisOrdering {
    pub fn parse(ndim: usize, specifier: &str) -> Result<Self, ParseError> { parse(ndim, specifier) }

    /// The ordering `[1, 2, ..., ndim]`, which leaves every axis in place.
    pub fn identity(ndim: usize) -> Self {
        let values = (1..=ndim).map(|v| v as isize).collect();
        Self { values }
    }

    pub fn ndim(&self) -> usize { self.values.len() }

    pub fn as_slice(&self) -> &[isize] { &self.values }

    pub fn into_vec(self) -> Vec<isize> { self.values }

    pub fn is_identity(&self) -> bool {
        self.values.iter().enumerate().all(|(n, &v)| v == n as isize + 1)
    }

    /// Iterate over `(source_axis, reversed)` for each output position.
    pub fn axes(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.values.iter().map(|&v| (v.unsigned_abs() - 1, v < 0))
    }

    /// The ordering which undoes `self`.
    pub fn inverse(&self) -> Self {
        let mut values = vec![0isize; self.ndim()];
        for (n, (ax, reversed)) in self.axes().enumerate() {
            let v = n as isize + 1;
            values[ax] = if reversed { -v } else { v };
        }
        Self { values }
    }

    /// Permute per-axis metadata (shape, voxel sizes, labels) into this ordering.
    pub fn reorder<T: Clone>(&self, per_axis: &[T]) -> Result<Vec<T>, OrderingError> {
        if per_axis.len() != self.ndim() {
            return Err(OrderingError::MetadataLength { expected: self.ndim(), found: per_axis.len() });
        }
        Ok(self.axes().map(|(ax, _)| per_axis[ax].clone()).collect())
    }

    /// Reorder the axes of `arr`, reversing those with a negative entry.
    ///
    /// This only rearranges strides; no element data is copied.
    pub fn apply<S: RawData>(&self, arr: ArrayBase<S, IxDyn>) -> Result<ArrayBase<S, IxDyn>, ShapeError> {
        if arr.ndim() != self.ndim() {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        let mut out = arr.permuted_axes(self.axes().map(|(ax, _)| ax).collect_vec());
        for (n, (_, reversed)) in self.axes().enumerate() {
            if reversed { out.invert_axis(Axis(n)); }
        }
        Ok(out)
    }
}

impl fmt::Display for AxisOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.values.iter().format_with(",", |&v, f| {
            let index = v.unsigned_abs() - 1;
            if v < 0 { f(&format_args!("-{}", index)) } else { f(&index) }
        });
        write!(f, "{}", tokens)
    }
}

impl FromStr for AxisOrdering {
    type Err = ParseError;

    /// Parse a specifier, taking the dimensionality from its token count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.split(',').count(), s)
    }
}

impl TryFrom<Vec<isize>> for AxisOrdering {
    type Error = OrderingError;

    fn try_from(values: Vec<isize>) -> Result<Self, Self::Error> {
        check(&values, values.len())?;
        Ok(Self { values })
    }
}

impl TryFrom<&[isize]> for AxisOrdering {
    type Error = OrderingError;

    fn try_from(values: &[isize]) -> Result<Self, Self::Error> { values.to_vec().try_into() }
}

impl From<AxisOrdering> for Vec<isize> {
    fn from(value: AxisOrdering) -> Self { value.values }
}

impl AsRef<[isize]> for AxisOrdering {
    fn as_ref(&self) -> &[isize] { &self.values }
}

/// Parse `specifier` into an ordering over exactly `ndim` axes.
pub fn parse(ndim: usize, specifier: &str) -> Result<AxisOrdering, ParseError> {
    match decode(ndim, specifier) {
        Ok(values) => {
            let ordering = AxisOrdering { values };
            tracing::debug!(specifier, ndim, ordering = ?ordering.as_slice(), "parsed axes specification");
            Ok(ordering)
        },
        Err(kind) => {
            tracing::debug!(specifier, ndim, cause = %kind, "rejected axes specification");
            Err(ParseError::new(specifier, kind))
        },
    }
}

fn decode(ndim: usize, specifier: &str) -> Result<Vec<isize>, OrderingError> {
    let parsed: Vec<isize> = specifier.split(',').enumerate()
        .map(|(position, token)| decode_token(position, token))
        .collect::<Result<_, _>>()?;

    if parsed.len() != ndim {
        return Err(OrderingError::WrongTokenCount { expected: ndim, found: parsed.len() });
    }
    check(&parsed, ndim)?;
    Ok(parsed)
}

fn decode_token(position: usize, token: &str) -> Result<isize, OrderingError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrderingError::MalformedToken { position, token: token.to_owned() });
    }
    // an all-digit run only fails to parse on overflow, which `check` reports as out of range
    let magnitude = digits.parse::<isize>().map_or(isize::MAX, |v| v.saturating_add(1));
    Ok(if negative { -magnitude } else { magnitude })
}

/// Check that `parsed` is a signed permutation of `1..=ndim`.
pub fn check(parsed: &[isize], ndim: usize) -> Result<(), OrderingError> {
    if parsed.len() != ndim {
        tracing::trace!(found = parsed.len(), ndim, "wrong number of axes");
        return Err(OrderingError::WrongTokenCount { expected: ndim, found: parsed.len() });
    }
    for (n, &value) in parsed.iter().enumerate() {
        let magnitude = value.unsigned_abs();
        if value == 0 || magnitude > ndim {
            tracing::trace!(position = n, value, ndim, "axis out of range");
            return Err(OrderingError::OutOfRangeAxis { position: n, value, ndim });
        }
        if let Some(first) = parsed[..n].iter().position(|v| v.unsigned_abs() == magnitude) {
            tracing::trace!(first, second = n, magnitude, "duplicate axis");
            return Err(OrderingError::DuplicateAxis { magnitude, first, second: n });
        }
    }
    Ok(())
}
