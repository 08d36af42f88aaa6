//! An explicit scene that owns named solids.
//!
//! Every operation takes and returns [`ObjectId`] handles; there is no
//! current selection. Names are unique: inserting or renaming onto a taken
//! name bumps a numeric suffix (`stair`, `stair1`, `stair2`, …).

use crate::errors::SceneError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::traits::CSGOps;
use hashbrown::HashSet;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::debug;

/// Handle to an object in a [`Scene`]. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

/// A named solid owned by a scene.
#[derive(Debug, Clone)]
pub struct SceneObject<S: Clone + Send + Sync + Debug> {
    pub name: String,
    pub mesh: Mesh<S>,
}

#[derive(Debug, Clone)]
pub struct Scene<S: Clone + Send + Sync + Debug> {
    objects: BTreeMap<ObjectId, SceneObject<S>>,
    next_id: u64,
}

impl<S: Clone + Send + Sync + Debug> Default for Scene<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Scene<S> {
    pub const fn new() -> Self {
        Scene {
            objects: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject<S>)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.objects.values().any(|object| object.name == name)
    }

    /// First name free in the scene: `name` itself, or `name` with its
    /// trailing digits replaced by the smallest free counter.
    pub fn unique_name(&self, name: &str) -> String {
        if !self.contains_name(name) {
            return name.to_string();
        }
        let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
        (1..)
            .map(|n| format!("{stem}{n}"))
            .find(|candidate| !self.contains_name(candidate))
            .unwrap_or_else(|| stem.to_string())
    }

    /// Add a solid under a unique version of `name`.
    pub fn insert(&mut self, name: &str, mesh: Mesh<S>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let name = self.unique_name(name);
        debug!(?id, %name, polygons = mesh.polygons.len(), "inserting object");
        self.objects.insert(id, SceneObject { name, mesh });
        id
    }

    pub fn get(&self, id: ObjectId) -> Result<&SceneObject<S>, SceneError> {
        self.objects.get(&id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.iter().find(|(_, object)| object.name == name).map(|(id, _)| id)
    }

    /// Take an object out of the scene.
    pub fn remove(&mut self, id: ObjectId) -> Result<SceneObject<S>, SceneError> {
        self.objects.remove(&id).ok_or(SceneError::UnknownObject(id))
    }

    /// Rename an object, returning the name it actually received.
    pub fn rename(&mut self, id: ObjectId, name: &str) -> Result<String, SceneError> {
        let current = &self.get(id)?.name;
        if current == name {
            return Ok(name.to_string());
        }
        let unique = self.unique_name(name);
        if let Some(object) = self.objects.get_mut(&id) {
            object.name = unique.clone();
        }
        Ok(unique)
    }

    /// Copy an object under a new name.
    pub fn duplicate(&mut self, id: ObjectId, name: &str) -> Result<ObjectId, SceneError> {
        let mesh = self.get(id)?.mesh.clone();
        Ok(self.insert(name, mesh))
    }

    /// Replace an object's mesh with a transformed copy.
    pub fn apply<F>(&mut self, id: ObjectId, f: F) -> Result<(), SceneError>
    where
        F: FnOnce(&Mesh<S>) -> Mesh<S>,
    {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(SceneError::UnknownObject(id))?;
        object.mesh = f(&object.mesh);
        Ok(())
    }

    pub fn translate(&mut self, id: ObjectId, x: Real, y: Real, z: Real) -> Result<(), SceneError> {
        self.apply(id, |mesh| mesh.translate(x, y, z))
    }

    /// Merge several objects into one new named object. The inputs are
    /// consumed.
    pub fn unite(&mut self, ids: &[ObjectId], name: &str) -> Result<ObjectId, SceneError> {
        if ids.is_empty() {
            return Err(SceneError::EmptySelection);
        }
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if !self.objects.contains_key(id) {
                return Err(SceneError::UnknownObject(*id));
            }
            if !seen.insert(*id) {
                return Err(SceneError::DuplicateSelection(*id));
            }
        }

        let merged = Mesh::merge(
            ids.iter()
                .filter_map(|id| self.objects.get(id))
                .map(|object| &object.mesh),
        );
        for id in ids {
            self.remove(*id)?;
        }
        debug!(count = ids.len(), "united objects");
        Ok(self.insert(name, merged))
    }
}
