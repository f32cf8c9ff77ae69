//! Parsed-script types.
//!
//! A [`SourceModule`] is the flattened, document-ordered view of every
//! class declaration in one Python script, nested classes included. It is
//! rebuilt on every discovery pass; nothing is cached across edits.

use serde::{Deserialize, Serialize};

/// Base-class names that mark a renderable Manim scene.
///
/// Extend this list to recognize additional scene bases.
pub const SCENE_BASE_NAMES: &[&str] = &["Scene", "ThreeDScene", "MovingCameraScene", "ZoomedScene"];

/// Import alias under which qualified bases are recognized (`manim.Scene`).
pub const MANIM_ALIAS: &str = "manim";

/// Whether `name` is one of the recognized scene base classes.
pub fn is_scene_base(name: &str) -> bool {
    SCENE_BASE_NAMES.contains(&name)
}

/// One base reference in a class declaration header.
///
/// Only the two shapes that can resolve to a scene base are kept; calls,
/// subscripts, and longer attribute chains are dropped at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaseRef {
    /// Bare identifier base, e.g. `class Intro(Scene):`.
    Simple { name: String },

    /// Module-qualified base, e.g. `class Intro(manim.Scene):`.
    Qualified { alias: String, name: String },
}

impl BaseRef {
    /// Create a bare-identifier base reference.
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple { name: name.into() }
    }

    /// Create a module-qualified base reference.
    pub fn qualified(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            alias: alias.into(),
            name: name.into(),
        }
    }

    /// Whether this reference resolves to a recognized scene base.
    ///
    /// Qualified references only match under the conventional import
    /// alias; `m.Scene` under `import manim as m` is deliberately not
    /// recognized.
    pub fn is_scene_base(&self) -> bool {
        match self {
            BaseRef::Simple { name } => is_scene_base(name),
            BaseRef::Qualified { alias, name } => alias == MANIM_ALIAS && is_scene_base(name),
        }
    }
}

/// A class declaration with its directly declared bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name as written in the source.
    pub name: String,

    /// Direct bases, in declaration order. Inherited bases of intermediate
    /// user classes are not resolved.
    pub bases: Vec<BaseRef>,
}

impl ClassDecl {
    /// A class qualifies as a scene iff at least one direct base resolves
    /// to the recognized set and the class does not redeclare a base name
    /// itself.
    pub fn is_scene(&self) -> bool {
        !is_scene_base(&self.name) && self.bases.iter().any(BaseRef::is_scene_base)
    }
}

/// Document-ordered class declarations of one script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceModule {
    pub classes: Vec<ClassDecl>,
}

impl SourceModule {
    /// Names of the classes that qualify as scenes, in encounter order.
    pub fn scene_names(&self) -> Vec<String> {
        self.classes
            .iter()
            .filter(|class| class.is_scene())
            .map(|class| class.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, bases: Vec<BaseRef>) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            bases,
        }
    }

    #[test]
    fn test_simple_scene_base_matches() {
        assert!(class("Intro", vec![BaseRef::simple("Scene")]).is_scene());
        assert!(class("Tour", vec![BaseRef::simple("ThreeDScene")]).is_scene());
    }

    #[test]
    fn test_qualified_base_requires_manim_alias() {
        assert!(class("Intro", vec![BaseRef::qualified("manim", "Scene")]).is_scene());
        assert!(!class("Intro", vec![BaseRef::qualified("mn", "Scene")]).is_scene());
    }

    #[test]
    fn test_non_scene_bases_do_not_match() {
        assert!(!class("Helper", vec![]).is_scene());
        assert!(!class("Helper", vec![BaseRef::simple("object")]).is_scene());
        assert!(!class("Derived", vec![BaseRef::simple("Intro")]).is_scene());
    }

    #[test]
    fn test_redeclared_base_never_qualifies() {
        // A local `class Scene(Scene):` shadows the library base and must
        // not show up as a renderable scene.
        assert!(!class("Scene", vec![BaseRef::simple("Scene")]).is_scene());
        assert!(!class("ZoomedScene", vec![BaseRef::qualified("manim", "Scene")]).is_scene());
    }

    #[test]
    fn test_scene_names_preserve_order() {
        let module = SourceModule {
            classes: vec![
                class("B", vec![BaseRef::simple("Scene")]),
                class("Helper", vec![]),
                class("A", vec![BaseRef::qualified("manim", "ZoomedScene")]),
            ],
        };
        assert_eq!(module.scene_names(), vec!["B", "A"]);
    }
}
