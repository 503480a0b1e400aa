// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Root-to-target transform resolution
//!
//! Walks the parent chain from a named component up to the root, composing
//! local transforms on the way. The walk is iterative with an explicit depth
//! bound, so a snapshot with a broken occurrence graph fails with
//! [`Error::CycleDetected`] instead of looping. Works against any
//! [`ComponentSource`], not just the in-memory [`Assembly`](toolframe_core::Assembly)
//! snapshot.

use crate::error::{Error, Result};
use toolframe_core::{ComponentId, ComponentSource, RigidTransform};
use tracing::{debug, warn};

/// Safety bound on parent-chain length
///
/// Real assemblies nest a few dozen levels at most; anything past this is a
/// malformed occurrence graph.
pub const MAX_CHAIN_DEPTH: usize = 256;

/// What to do when a target name matches more than one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityPolicy {
    /// Fail with [`Error::AmbiguousComponent`]
    #[default]
    Reject,
    /// Use the first occurrence and log the others
    FirstMatch,
}

/// Resolver configuration
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Ambiguous-name handling
    pub ambiguity: AmbiguityPolicy,
    /// Parent-chain depth bound
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::default(),
            max_depth: MAX_CHAIN_DEPTH,
        }
    }
}

/// A resolved target frame with provenance
#[derive(Debug, Clone)]
pub struct ResolvedFrame {
    /// Root-to-target rigid transform, in document length units
    pub transform: RigidTransform,
    /// The component the name resolved to
    pub target: ComponentId,
    /// Occurrence path of the target from the root, slash-joined
    pub path: String,
    /// Number of parent links walked
    pub depth: usize,
}

/// Computes the rigid transform from the assembly root to a named component
///
/// The resolver only reads the source: no mutation, no caching, and each
/// call is independent and deterministic.
#[derive(Debug, Default)]
pub struct TransformResolver {
    config: ResolverConfig,
}

impl TransformResolver {
    /// Resolver with default configuration (reject ambiguous names)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with explicit configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Root-to-target transform for the component named `name`
    ///
    /// The result maps coordinates in the target's local frame into the root
    /// frame; callers wanting the opposite direction take
    /// [`RigidTransform::inverse`] of it.
    pub fn resolve<S: ComponentSource>(&self, source: &S, name: &str) -> Result<RigidTransform> {
        Ok(self.resolve_frame(source, name)?.transform)
    }

    /// Like [`resolve`](Self::resolve), also returning the occurrence path
    /// and chain depth of the target
    pub fn resolve_frame<S: ComponentSource>(
        &self,
        source: &S,
        name: &str,
    ) -> Result<ResolvedFrame> {
        let target = self.locate(source, name)?;

        let mut acc = RigidTransform::identity();
        let mut depth = 0usize;
        let mut current = target;

        // The root's own local transform is not applied; it has no parent
        // frame to be relative to.
        while let Some(parent) = source.parent_of(current) {
            let local = source
                .local_transform(current)
                .ok_or_else(|| Error::ComponentNotFound {
                    name: name.to_string(),
                })?;

            acc = local * acc;
            depth += 1;
            if depth > self.config.max_depth {
                return Err(Error::CycleDetected {
                    start: name.to_string(),
                    depth: self.config.max_depth,
                });
            }
            current = parent;
        }

        let path = source.path(target);
        debug!(occurrence = %path, depth, "resolved tool frame");

        Ok(ResolvedFrame {
            transform: acc,
            target,
            path,
            depth,
        })
    }

    /// Map a name to exactly one component id, per the configured policy
    fn locate<S: ComponentSource>(&self, source: &S, name: &str) -> Result<ComponentId> {
        let matches = source.lookup(name);
        let pool = matches.best();

        match pool {
            [] => Err(Error::ComponentNotFound {
                name: name.to_string(),
            }),
            [only] => {
                if matches.is_fallback() {
                    warn!(
                        query = name,
                        matched = %source.path(*only),
                        "no exact name match, using case-insensitive fallback"
                    );
                }
                Ok(*only)
            }
            [first, rest @ ..] => match self.config.ambiguity {
                AmbiguityPolicy::Reject => Err(Error::AmbiguousComponent {
                    name: name.to_string(),
                    paths: pool.iter().map(|id| source.path(*id)).collect(),
                }),
                AmbiguityPolicy::FirstMatch => {
                    let skipped: Vec<String> = rest.iter().map(|id| source.path(*id)).collect();
                    warn!(
                        query = name,
                        matched = %source.path(*first),
                        skipped = ?skipped,
                        "multiple occurrences match, using the first"
                    );
                    Ok(*first)
                }
            },
        }
    }
}
