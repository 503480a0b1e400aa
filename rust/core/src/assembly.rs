// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly snapshot model
//!
//! An [`Assembly`] is a read-only, in-memory snapshot of a CAD document's
//! component tree: every component carries a display name, a parent link
//! (`None` only for the root) and a rigid transform relative to its parent.
//! Host adapters build the snapshot once; resolution never mutates it.

use crate::error::{Error, Result};
use crate::pose::RigidTransform;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;

/// Id list that stays on the stack for the common 1-2 match case
pub type IdList = SmallVec<[ComponentId; 2]>;

/// Identifier of a component inside an assembly snapshot
///
/// Ids are dense indices assigned in insertion order; the root is always `#0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Index into the owning assembly's component arena
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the assembly tree
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// Stable id inside the owning assembly
    pub id: ComponentId,
    /// Display name; host environments do not guarantee uniqueness
    pub name: String,
    /// Parent component, `None` only for the root
    pub parent: Option<ComponentId>,
    /// Pose relative to the parent frame
    pub local: RigidTransform,
}

impl Component {
    /// Whether this component is the tree root
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Result of a name lookup, split into exact and fallback matches
///
/// Exact (case-sensitive) matches always win; the case-insensitive substring
/// matches are only consulted when no exact match exists.
#[derive(Debug, Clone, Default)]
pub struct NameMatches {
    /// Components whose name equals the query exactly
    pub exact: IdList,
    /// Components whose lowercased name contains the lowercased query
    pub partial: IdList,
}

impl NameMatches {
    /// The candidate pool the caller should use
    #[inline]
    pub fn best(&self) -> &[ComponentId] {
        if self.exact.is_empty() {
            &self.partial
        } else {
            &self.exact
        }
    }

    /// Whether the lookup found anything at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }

    /// Whether the best pool came from the fallback matches
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.exact.is_empty() && !self.partial.is_empty()
    }
}

/// Read-only query capability over a component tree
///
/// The resolver in `toolframe-kinematics` works against this interface, so a
/// host adapter can serve a live CAD document directly, while tests and batch
/// tools use the in-memory [`Assembly`] snapshot.
pub trait ComponentSource {
    /// Matching components for a display name, exact plus fallback pools
    fn lookup(&self, name: &str) -> NameMatches;

    /// Local transform of a component relative to its parent
    ///
    /// `None` when the id is unknown to this source.
    fn local_transform(&self, id: ComponentId) -> Option<RigidTransform>;

    /// Parent link of a component (`None` for the root)
    fn parent_of(&self, id: ComponentId) -> Option<ComponentId>;

    /// Occurrence path from the root, slash-joined, for diagnostics
    fn path(&self, id: ComponentId) -> String;
}

/// Read-only snapshot of a CAD assembly tree
///
/// Components live in an arena indexed by [`ComponentId`]; a lowercased name
/// index accelerates lookups. Parent links always point at components added
/// earlier, so a snapshot built through [`Assembly::add_component`] is acyclic
/// by construction.
#[derive(Debug, Clone)]
pub struct Assembly {
    components: Vec<Component>,
    by_name: FxHashMap<String, IdList>,
    root: ComponentId,
}

impl Assembly {
    /// Create a snapshot containing only the root component
    ///
    /// The root has no parent and an identity local transform.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = ComponentId(0);
        let name = root_name.into();
        let mut by_name = FxHashMap::default();
        by_name.insert(name.to_lowercase(), IdList::from_slice(&[root]));

        Self {
            components: vec![Component {
                id: root,
                name,
                parent: None,
                local: RigidTransform::identity(),
            }],
            by_name,
            root,
        }
    }

    /// Add a component under an existing parent
    ///
    /// Fails with [`Error::UnknownParent`] when `parent` is not in the arena.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        parent: ComponentId,
        local: RigidTransform,
    ) -> Result<ComponentId> {
        let name = name.into();
        if parent.index() >= self.components.len() {
            return Err(Error::UnknownParent {
                name,
                parent: parent.0,
            });
        }

        let id = ComponentId(self.components.len() as u32);
        self.by_name
            .entry(name.to_lowercase())
            .or_default()
            .push(id);
        self.components.push(Component {
            id,
            name,
            parent: Some(parent),
            local,
        });
        Ok(id)
    }

    /// The root component's id
    #[inline]
    pub fn root(&self) -> ComponentId {
        self.root
    }

    /// Look up a component by id
    #[inline]
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.index())
    }

    /// Parent of a component (`None` for the root or an unknown id)
    #[inline]
    pub fn parent_of(&self, id: ComponentId) -> Option<ComponentId> {
        self.component(id).and_then(|c| c.parent)
    }

    /// Local transform of a component relative to its parent
    #[inline]
    pub fn local_transform(&self, id: ComponentId) -> Option<RigidTransform> {
        self.component(id).map(|c| c.local)
    }

    /// Exact, case-sensitive name lookup
    pub fn find_by_name(&self, name: &str) -> IdList {
        self.by_name
            .get(&name.to_lowercase())
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| self.components[id.index()].name == name)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Name lookup with case-insensitive substring fallback
    ///
    /// Exact matches come from the name index; the fallback pool is a linear
    /// scan for names containing the query, matching how operators tag tool
    /// frames in practice (`TCP`, `tcp_gripper`, `Tcp-v2`).
    pub fn find_by_name_relaxed(&self, name: &str) -> NameMatches {
        let exact = self.find_by_name(name);
        let needle = name.to_lowercase();
        let partial = self
            .components
            .iter()
            .filter(|c| {
                c.name != name && c.name.to_lowercase().contains(&needle)
            })
            .map(|c| c.id)
            .collect();

        NameMatches { exact, partial }
    }

    /// Slash-joined occurrence path from the root, e.g. `Root/Arm/Wrist/TCP`
    ///
    /// The walk is bounded by the arena size so a malformed snapshot cannot
    /// loop; on an unknown id the path is empty.
    pub fn path(&self, id: ComponentId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut current = Some(id);
        let mut hops = 0usize;

        while let Some(cur) = current {
            let Some(comp) = self.component(cur) else { break };
            parts.push(&comp.name);
            hops += 1;
            if hops > self.components.len() {
                break;
            }
            current = comp.parent;
        }

        parts.reverse();
        parts.join("/")
    }

    /// Number of components, root included
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the snapshot has no components (never true once constructed)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over all components in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Rewire a parent link without acyclicity validation
    ///
    /// Exists to simulate malformed host documents (broken occurrence graphs)
    /// when exercising the resolver's defensive paths. Not part of the normal
    /// construction API.
    #[doc(hidden)]
    pub fn set_parent_unchecked(&mut self, id: ComponentId, parent: Option<ComponentId>) {
        if let Some(comp) = self.components.get_mut(id.index()) {
            comp.parent = parent;
        }
    }
}

impl ComponentSource for Assembly {
    fn lookup(&self, name: &str) -> NameMatches {
        self.find_by_name_relaxed(name)
    }

    fn local_transform(&self, id: ComponentId) -> Option<RigidTransform> {
        Assembly::local_transform(self, id)
    }

    fn parent_of(&self, id: ComponentId) -> Option<ComponentId> {
        Assembly::parent_of(self, id)
    }

    fn path(&self, id: ComponentId) -> String {
        Assembly::path(self, id)
    }
}
