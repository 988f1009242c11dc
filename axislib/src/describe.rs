//! Human-readable summary of a dataset's axes.

use std::borrow::Cow;
use std::fmt;

use itertools::Itertools;

use crate::error::OrderingError;
use crate::labels::{default_description, default_units};
use crate::ordering::AxisOrdering;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisInfo {
    /// Number of samples along the axis.
    pub dim: usize,
    /// Sample spacing.
    pub vox: f64,
    pub description: Cow<'static, str>,
    pub units: Cow<'static, str>,
}

impl AxisInfo {
    pub fn new<D, U>(dim: usize, vox: f64, description: D, units: U) -> Self
    where D: Into<Cow<'static, str>>, U: Into<Cow<'static, str>>
    {
        Self { dim, vox, description: description.into(), units: units.into() }
    }
}

/// Per-axis metadata together with the (validated) signed stride ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axes {
    axes: Vec<AxisInfo>,
    ordering: AxisOrdering,
}

impl Axes {
    pub fn new(axes: Vec<AxisInfo>, ordering: AxisOrdering) -> Result<Self, OrderingError> {
        if axes.len() != ordering.ndim() {
            return Err(OrderingError::MetadataLength { expected: ordering.ndim(), found: axes.len() });
        }
        Ok(Self { axes, ordering })
    }

    /// Build from sizes and spacings, labelling axes with the canonical
    /// descriptions and units.
    pub fn with_default_labels(dims: &[usize], vox: &[f64], ordering: AxisOrdering) -> Result<Self, OrderingError> {
        if dims.len() != vox.len() {
            return Err(OrderingError::MetadataLength { expected: dims.len(), found: vox.len() });
        }
        let axes = dims.iter().zip(vox).enumerate()
            .map(|(n, (&dim, &vox))| AxisInfo::new(dim, vox, default_description(n), default_units(n)))
            .collect();
        Self::new(axes, ordering)
    }

    pub fn ndim(&self) -> usize { self.axes.len() }

    pub fn axis(&self, n: usize) -> Option<&AxisInfo> { self.axes.get(n) }

    pub fn ordering(&self) -> &AxisOrdering { &self.ordering }

    pub fn iter(&self) -> impl Iterator<Item = &AxisInfo> + '_ { self.axes.iter() }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Axes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            axes: Vec<AxisInfo>,
            ordering: AxisOrdering,
        }

        let raw = Raw::deserialize(deserializer)?;
        Axes::new(raw.axes, raw.ordering).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dim [ {} ]", self.iter().map(|ax| ax.dim).format(" "))?;
        writeln!(f, "vox [ {} ]", self.iter().map(|ax| ax.vox).format(" "))?;
        writeln!(f, "stride [ {} ]", self.ordering.as_slice().iter().format_with(" ", |v, f| f(&format_args!("{:+}", v))))?;
        writeln!(f, "desc [ {} ]", self.iter().format_with(" ", |ax, f| f(&format_args!("\"{}\"", ax.description))))?;
        write!(f, "units [ {} ]", self.iter().format_with(" ", |ax, f| f(&format_args!("\"{}\"", ax.units))))
    }
}
