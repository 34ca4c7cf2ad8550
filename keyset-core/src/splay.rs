//! Self-adjusting binary search tree (splay tree)
//!
//! Nodes live in an arena and link to each other by index. Child links own
//! the structure; the parent link is a back-reference used only to walk
//! upward while splaying.
//!
//! Every insert and every lookup that visits a node ends by splaying: the
//! matched node, the new node, or the last node seen on a failed search
//! becomes the root.

use std::cmp::Ordering;

use log::trace;

type NodeId = usize;

#[derive(Clone, Debug)]
struct Node {
    key: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

/// Splay tree over `i32` keys
#[derive(Clone, Debug, Default)]
pub struct AdaptiveTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl AdaptiveTree {
    /// Create an empty tree
    pub fn new() -> Self {
        AdaptiveTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert a key and splay it to the root
    ///
    /// Returns true if the key was new. A duplicate only promotes the existing
    /// node.
    pub fn insert(&mut self, key: i32) -> bool {
        let mut cur = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.alloc(key, None));
                return true;
            }
        };

        loop {
            let next = match key.cmp(&self.nodes[cur].key) {
                Ordering::Less => self.nodes[cur].left,
                Ordering::Greater => self.nodes[cur].right,
                Ordering::Equal => {
                    self.splay(cur);
                    return false;
                }
            };
            match next {
                Some(next) => cur = next,
                None => break,
            }
        }

        let id = self.alloc(key, Some(cur));
        if key < self.nodes[cur].key {
            self.nodes[cur].left = Some(id);
        } else {
            self.nodes[cur].right = Some(id);
        }
        self.splay(id);
        true
    }

    /// Look up a key, splaying the match (or the last node visited) to the root
    pub fn contains(&mut self, key: i32) -> bool {
        let mut cur = self.root;
        let mut last = None;

        while let Some(id) = cur {
            last = Some(id);
            cur = match key.cmp(&self.nodes[id].key) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => {
                    self.splay(id);
                    return true;
                }
            };
        }

        if let Some(last) = last {
            self.splay(last);
        }
        false
    }

    /// Keys in pre-order (node, left subtree, right subtree)
    pub fn traverse(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            keys.push(node.key);
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }

        keys
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = self.root;

        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].left;
            }
            match stack.pop() {
                Some(id) => {
                    keys.push(self.nodes[id].key);
                    cur = self.nodes[id].right;
                }
                None => break,
            }
        }

        keys
    }

    /// Key currently at the root
    pub fn root(&self) -> Option<i32> {
        self.root.map(|id| self.nodes[id].key)
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, key: i32, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(Node {
            key,
            left: None,
            right: None,
            parent,
        });
        self.nodes.len() - 1
    }

    #[inline(always)]
    fn is_left_child(&self, id: NodeId, parent: NodeId) -> bool {
        self.nodes[parent].left == Some(id)
    }

    /// Point whatever referenced `old` (a parent slot or the root) at `new`
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }

    /// Lift the right child of `x` into its place
    fn rotate_left(&mut self, x: NodeId) {
        let y = match self.nodes[x].right {
            Some(y) => y,
            None => return,
        };

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Lift the left child of `x` into its place
    fn rotate_right(&mut self, x: NodeId) {
        let y = match self.nodes[x].left {
            Some(y) => y,
            None => return,
        };

        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, y);

        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn splay(&mut self, x: NodeId) {
        while let Some(p) = self.nodes[x].parent {
            let x_is_left = self.is_left_child(x, p);
            let grandparent = self.nodes[p].parent;

            match grandparent {
                None => {
                    trace!("splay: zig at {}", self.nodes[p].key);
                    if x_is_left {
                        self.rotate_right(p);
                    } else {
                        self.rotate_left(p);
                    }
                }
                Some(g) if x_is_left == self.is_left_child(p, g) => {
                    trace!("splay: zig-zig at {}", self.nodes[g].key);
                    if x_is_left {
                        self.rotate_right(g);
                        self.rotate_right(p);
                    } else {
                        self.rotate_left(g);
                        self.rotate_left(p);
                    }
                }
                Some(g) => {
                    trace!("splay: zig-zag at {}", self.nodes[g].key);
                    if x_is_left {
                        self.rotate_right(p);
                        self.rotate_left(g);
                    } else {
                        self.rotate_left(p);
                        self.rotate_right(g);
                    }
                }
            }
        }
    }

    /// Check ordering and that every parent link mirrors a child link.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].parent, None, "root has a parent");
        }
        for (id, node) in self.nodes.iter().enumerate() {
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.nodes[child].parent, Some(id), "broken back-link under {}", node.key);
            }
        }

        let keys = self.keys();
        assert_eq!(keys.len(), self.nodes.len(), "unreachable nodes");
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order: {:?}", keys);
    }
}
