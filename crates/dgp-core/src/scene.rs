//! The scene graph container and its nodes.

use std::ops::Index;

use crate::shape::Shape;

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Shape(Shape),
    Group(Group),
}

impl Node {
    pub fn is_shape(&self) -> bool {
        matches!(self, Node::Shape(_))
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Node::Shape(shape) => Some(shape),
            Node::Group(_) => None,
        }
    }

    /// Node type name, as written in VRML.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Shape(_) => "Shape",
            Node::Group(_) => "Group",
        }
    }
}

impl From<Shape> for Node {
    fn from(shape: Shape) -> Self {
        Node::Shape(shape)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// A grouping node holding nested children.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Group {
    pub name: String,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Root container of a scene: an ordered list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneGraph {
    /// File the scene was loaded from, if any.
    pub url: String,
    pub children: Vec<Node>,
}

impl SceneGraph {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node and return its index.
    pub fn add_child(&mut self, node: impl Into<Node>) -> usize {
        self.children.push(node.into());
        self.children.len() - 1
    }

    /// Builder form of `add_child`.
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add_child(node);
        self
    }

    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }
}

impl Index<usize> for SceneGraph {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.children[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{IndexedFaceSet, IndexedLineSet};

    #[test]
    fn test_empty_scene() {
        let scene = SceneGraph::new();
        assert_eq!(scene.number_of_children(), 0);
        assert!(scene.child(0).is_none());
    }

    #[test]
    fn test_add_child() {
        let mut scene = SceneGraph::new();
        let idx = scene.add_child(Shape::new(IndexedFaceSet::new()));
        assert_eq!(idx, 0);
        assert!(scene[0].is_shape());

        let idx = scene.add_child(Group::new("parts"));
        assert_eq!(idx, 1);
        assert!(!scene[1].is_shape());
        assert_eq!(scene[1].type_name(), "Group");
    }

    #[test]
    fn test_shape_geometry_kinds() {
        let faces = Node::from(Shape::new(IndexedFaceSet::new()));
        let lines = Node::from(Shape::new(IndexedLineSet::new()));

        let geometry = faces.as_shape().and_then(Shape::geometry);
        assert!(geometry.is_some_and(|g| g.is_indexed_face_set()));

        let geometry = lines.as_shape().and_then(Shape::geometry);
        assert!(geometry.is_some_and(|g| !g.is_indexed_face_set()));
        assert_eq!(geometry.map(|g| g.type_name()), Some("IndexedLineSet"));
    }
}
