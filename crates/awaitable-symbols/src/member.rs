// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Member descriptors returned by member queries.

use serde::{Deserialize, Serialize};

use crate::handle::TypeHandle;

/// Declared accessibility of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }
}

/// The kind of member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberKind {
    /// A method. For extension methods the first parameter is the extended type.
    Method {
        params: Vec<TypeHandle>,
        /// `None` for methods returning nothing.
        return_type: Option<TypeHandle>,
        #[serde(default)]
        is_extension: bool,
    },
    /// A property.
    Property {
        ty: TypeHandle,
    },
}

/// A method or property declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(flatten)]
    pub kind: MemberKind,
}

impl Member {
    /// An ordinary (non-extension) method.
    pub fn method(
        name: impl Into<String>,
        params: Vec<TypeHandle>,
        return_type: Option<TypeHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            accessibility: Accessibility::Public,
            kind: MemberKind::Method { params, return_type, is_extension: false },
        }
    }

    /// An extension method on `target`, taking `target` as its first parameter.
    pub fn extension(
        name: impl Into<String>,
        target: TypeHandle,
        return_type: Option<TypeHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            accessibility: Accessibility::Public,
            kind: MemberKind::Method {
                params: vec![target],
                return_type,
                is_extension: true,
            },
        }
    }

    pub fn property(name: impl Into<String>, ty: TypeHandle) -> Self {
        Self {
            name: name.into(),
            accessibility: Accessibility::Public,
            kind: MemberKind::Property { ty },
        }
    }

    /// Replace the declared accessibility.
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property { .. })
    }

    pub fn is_extension(&self) -> bool {
        matches!(self.kind, MemberKind::Method { is_extension: true, .. })
    }

    /// Parameter count for methods, `None` for properties.
    pub fn arity(&self) -> Option<usize> {
        match &self.kind {
            MemberKind::Method { params, .. } => Some(params.len()),
            MemberKind::Property { .. } => None,
        }
    }

    pub fn return_type(&self) -> Option<TypeHandle> {
        match &self.kind {
            MemberKind::Method { return_type, .. } => *return_type,
            MemberKind::Property { .. } => None,
        }
    }

    pub fn first_param(&self) -> Option<TypeHandle> {
        match &self.kind {
            MemberKind::Method { params, .. } => params.first().copied(),
            MemberKind::Property { .. } => None,
        }
    }
}
