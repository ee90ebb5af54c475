//! Structural projection between independently owned schemas.
//!
//! A configuration document and the runtime options handed to the
//! orchestrator evolve separately, so neither side carries a hand-written
//! mapping to the other. Instead each side declares a field table (see
//! [`projection_source!`] and [`projection_target!`]) and a
//! [`ProjectionPlan`] pairs the two tables by field name and field kind.
//!
//! Projection rules:
//! - a source field that is absent (`None`) is never copied, so the
//!   destination keeps its own default instead of an accidental zero value
//! - a source field with no destination counterpart is skipped
//! - a destination field with the same name but a different kind is skipped
//!
//! None of these cases is an error. Skips are reported once, when the plan
//! is built, at `debug` level.
//!
//! ```ignore
//! let options: ClusterOptions = project(&cluster);
//! ```

use crate::config::{ClusterNodeGroup, Funding};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;

#[cfg(test)]
mod tests;

/// The kind of value a projectable field holds.
///
/// Two fields are compatible only when their kinds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Funding,
    NodeGroups,
}

/// A field value in transit between a source and a destination.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Funding(Funding),
    NodeGroups(BTreeMap<String, ClusterNodeGroup>),
}

impl FieldValue {
    /// Kind of the carried value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Funding(_) => FieldKind::Funding,
            FieldValue::NodeGroups(_) => FieldKind::NodeGroups,
        }
    }
}

/// A Rust type that can travel through a projection.
pub trait FieldType: Sized {
    const KIND: FieldKind;

    fn into_value(self) -> FieldValue;

    /// Unwraps a value of the matching kind, `None` otherwise.
    fn from_value(value: FieldValue) -> Option<Self>;
}

macro_rules! impl_field_type {
    ($ty:ty, $variant:ident) => {
        impl FieldType for $ty {
            const KIND: FieldKind = FieldKind::$variant;

            fn into_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_field_type!(String, Text);
impl_field_type!(bool, Flag);
impl_field_type!(Funding, Funding);
impl_field_type!(BTreeMap<String, ClusterNodeGroup>, NodeGroups);

/// Name and kind of one field in a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A struct that publishes a field table.
pub trait Schema {
    const FIELDS: &'static [FieldDescriptor];

    /// Look up a field by name.
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}

/// A schema whose fields may each be absent.
pub trait ProjectionSource: Schema {
    /// The value of `name`, or `None` when the field is absent or unknown.
    fn field_value(&self, name: &str) -> Option<FieldValue>;
}

/// A schema that can be filled in field by field, starting from its default.
pub trait ProjectionTarget: Schema + Default {
    /// Write `value` into the field `name`.
    ///
    /// Returns `false` (leaving `self` untouched) when there is no such field
    /// or the value has the wrong kind.
    fn assign(&mut self, name: &str, value: FieldValue) -> bool;
}

/// Implements [`Schema`] and [`ProjectionSource`] for a struct of `Option` fields.
///
/// Each entry names a field and the type inside its `Option`.
macro_rules! projection_source {
    ($source:ty { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $crate::projection::Schema for $source {
            const FIELDS: &'static [$crate::projection::FieldDescriptor] = &[
                $($crate::projection::FieldDescriptor {
                    name: stringify!($field),
                    kind: <$ty as $crate::projection::FieldType>::KIND,
                }),*
            ];
        }

        impl $crate::projection::ProjectionSource for $source {
            fn field_value(&self, name: &str) -> Option<$crate::projection::FieldValue> {
                $(
                    if name == stringify!($field) {
                        let value: &Option<$ty> = &self.$field;
                        return value
                            .clone()
                            .map($crate::projection::FieldType::into_value);
                    }
                )*
                None
            }
        }
    };
}
pub(crate) use projection_source;

/// Implements [`Schema`] and [`ProjectionTarget`] for a struct of plain fields.
///
/// Only the listed fields take part in projection.
macro_rules! projection_target {
    ($target:ty { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $crate::projection::Schema for $target {
            const FIELDS: &'static [$crate::projection::FieldDescriptor] = &[
                $($crate::projection::FieldDescriptor {
                    name: stringify!($field),
                    kind: <$ty as $crate::projection::FieldType>::KIND,
                }),*
            ];
        }

        impl $crate::projection::ProjectionTarget for $target {
            fn assign(&mut self, name: &str, value: $crate::projection::FieldValue) -> bool {
                $(
                    if name == stringify!($field) {
                        return match <$ty as $crate::projection::FieldType>::from_value(value) {
                            Some(v) => {
                                self.$field = v;
                                true
                            }
                            None => false,
                        };
                    }
                )*
                let _ = value;
                false
            }
        }
    };
}
pub(crate) use projection_target;

/// The matched field pairs between a source schema `S` and a destination `D`.
///
/// Building the plan does all the name and kind matching; applying it only
/// copies values. Plans are immutable and can be cached in a static.
#[derive(Debug, Clone)]
pub struct ProjectionPlan<S, D> {
    fields: Vec<&'static str>,
    marker: PhantomData<fn(&S) -> D>,
}

impl<S: ProjectionSource, D: ProjectionTarget> ProjectionPlan<S, D> {
    /// Match every source field against the destination table.
    pub fn new() -> Self {
        let mut fields = Vec::with_capacity(S::FIELDS.len());

        for source in S::FIELDS {
            match D::field(source.name) {
                Some(dest) if dest.kind == source.kind => fields.push(source.name),
                Some(dest) => debug!(
                    field = source.name,
                    source_kind = ?source.kind,
                    dest_kind = ?dest.kind,
                    "projection skips field with mismatched kind"
                ),
                None => debug!(
                    field = source.name,
                    "projection skips field without destination counterpart"
                ),
            }
        }

        Self {
            fields,
            marker: PhantomData,
        }
    }

    /// Names of the fields this plan copies, in source declaration order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Build a fresh destination value from `source`.
    ///
    /// Starts from `D::default()` and copies every matched field that is
    /// present in `source`.
    pub fn apply(&self, source: &S) -> D {
        let mut out = D::default();
        for &name in &self.fields {
            if let Some(value) = source.field_value(name) {
                let assigned = out.assign(name, value);
                debug_assert!(assigned, "planned field '{}' was not assignable", name);
            }
        }
        out
    }
}

impl<S: ProjectionSource, D: ProjectionTarget> Default for ProjectionPlan<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Project `source` into a new `D` with a one-off plan.
pub fn project<S: ProjectionSource, D: ProjectionTarget>(source: &S) -> D {
    ProjectionPlan::<S, D>::new().apply(source)
}
