//! Append-only arena of modules.

use serde::{Deserialize, Serialize};

use super::module::{Module, ModuleId};

/// Directed tree of modules
///
/// One distinguished root at index 0; every other module stores the id of
/// its single parent, which is always a smaller index, so the structure is
/// acyclic and fully connected by construction. Depth is cached on each
/// record at creation time instead of being recomputed per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleTree {
    modules: Vec<Module>,
}

impl ModuleTree {
    /// Create a tree holding only the root module (`x = 0`, `c = 0`)
    pub fn new() -> Self {
        Self {
            modules: vec![Module::root()],
        }
    }

    /// Number of modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// A tree always holds at least the root
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The root module
    pub fn root(&self) -> &Module {
        &self.modules[0]
    }

    /// Get a module by id
    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id)
    }

    /// Depth of a module; root depth is 1
    pub fn depth(&self, id: ModuleId) -> Option<u32> {
        self.modules.get(id).map(|m| m.depth)
    }

    /// Iterate modules in id order
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Ids of the direct children of `id`
    pub fn children(&self, id: ModuleId) -> Vec<ModuleId> {
        self.modules
            .iter()
            .filter(|m| m.parent == Some(id))
            .map(|m| m.id)
            .collect()
    }

    /// Apply a contribution of magnitude `alpha` to an existing module
    pub(crate) fn extend_module(&mut self, id: ModuleId, alpha: f64) {
        let module = &mut self.modules[id];
        module.c += 1;
        module.x += alpha;
    }

    /// Append a new leaf under `parent`, seeded with contribution `alpha`
    ///
    /// The founded module starts at `c = 1`: its seeding contribution counts,
    /// even though the virtual score that chose it carried no crowd factor.
    pub(crate) fn found_child(&mut self, parent: ModuleId, alpha: f64) -> ModuleId {
        let id = self.modules.len();
        let depth = self.modules[parent].depth + 1;
        self.modules.push(Module {
            id,
            label: format!("m{id}"),
            parent: Some(parent),
            x: alpha,
            c: 1,
            depth,
        });
        id
    }
}

impl Default for ModuleTree {
    fn default() -> Self {
        Self::new()
    }
}
