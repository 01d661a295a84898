//! Persistent binary search tree of strings
//!
//! Unrelated to the interpreter; kept alongside it as the companion
//! persistent structure. Insertion copies the path from the root to the
//! insertion point and shares every other subtree with the previous version.
//! There is no rebalancing.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Immutable, unbalanced binary search tree
#[derive(Clone, Default)]
pub struct Tree {
    root: Option<Rc<Node>>,
}

struct Node {
    left: Tree,
    key: String,
    right: Tree,
}

impl Tree {
    /// Create the empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Build a tree by inserting `keys` in order
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        keys.into_iter()
            .fold(Tree::new(), |tree, key| tree.insert(key))
    }

    /// Return a new tree containing `key`
    ///
    /// Inserting a key that is already present rebuilds that node with the
    /// new key and keeps both of its children.
    pub fn insert(&self, key: impl Into<String>) -> Tree {
        let key = key.into();
        match &self.root {
            None => Tree::node(Tree::new(), key, Tree::new()),
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => {
                    Tree::node(node.left.insert(key), node.key.clone(), node.right.clone())
                }
                Ordering::Greater => {
                    Tree::node(node.left.clone(), node.key.clone(), node.right.insert(key))
                }
                Ordering::Equal => Tree::node(node.left.clone(), key, node.right.clone()),
            },
        }
    }

    /// Whether `key` is in the tree
    pub fn member(&self, key: &str) -> bool {
        let mut current = self;
        while let Some(node) = &current.root {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        match &self.root {
            None => 0,
            Some(node) => node.left.len() + 1 + node.right.len(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match &self.root {
            None => 0,
            Some(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    /// Key at the root
    pub fn key(&self) -> Option<&str> {
        self.root.as_ref().map(|node| node.key.as_str())
    }

    /// Left subtree (empty for the empty tree)
    pub fn left(&self) -> Tree {
        self.root
            .as_ref()
            .map(|node| node.left.clone())
            .unwrap_or_default()
    }

    /// Right subtree (empty for the empty tree)
    pub fn right(&self) -> Tree {
        self.root
            .as_ref()
            .map(|node| node.right.clone())
            .unwrap_or_default()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.len());
        self.collect_keys(&mut keys);
        keys
    }

    /// Whether both handles refer to the same tree version
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Render as an indented, branch-annotated listing
    ///
    /// The root is printed bare. Every other node is printed after its
    /// parent's prefix with `├─ ` when it is a left child and `└─ ` when it
    /// is a right child; left children come first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "", true);
        out
    }

    fn node(left: Tree, key: String, right: Tree) -> Tree {
        Tree {
            root: Some(Rc::new(Node { left, key, right })),
        }
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        if let Some(node) = &self.root {
            node.left.collect_keys(keys);
            keys.push(node.key.as_str());
            node.right.collect_keys(keys);
        }
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_left: bool) {
        let Some(node) = &self.root else {
            return;
        };

        out.push_str(prefix);
        if !prefix.is_empty() {
            out.push_str(if is_left { "├─ " } else { "└─ " });
        }
        out.push_str(&node.key);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_left { "│  " } else { "   " });
        node.left.render_into(out, &child_prefix, true);
        node.right.render_into(out, &child_prefix, false);
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Insertion orders shown by `slp bst` when no keys are given
pub const DEMO_SEQUENCES: &[(&str, &[&str])] = &[
    ("left heavy", &["t", "s", "p", "i", "p", "f", "b", "s", "t"]),
    ("right heavy", &["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
    ("balanced", &["e", "b", "g", "a", "c", "d", "f", "h", "i"]),
];
