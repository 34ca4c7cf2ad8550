//! Height-balanced binary search tree (AVL)
//!
//! Provides:
//! - O(log n) worst-case insert and lookup
//! - Cached subtree heights (leaf = 1, empty = 0)
//! - Duplicate inserts leave the tree untouched

use std::cmp::{max, Ordering};

use log::trace;

type Link = Option<Box<Node>>;

/// Tree node owning both of its children
#[derive(Clone, Debug)]
struct Node {
    key: i32,
    height: usize,
    left: Link,
    right: Link,
}

/// Height of a possibly-empty subtree
#[inline(always)]
fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl Node {
    fn leaf(key: i32) -> Box<Node> {
        Box::new(Node {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline(always)]
    fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    /// Left subtree height minus right subtree height
    #[inline(always)]
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Lift the left child of `y` into its place
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    trace!("avl: rotate right at {}", y.key);

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Lift the right child of `x` into its place
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    trace!("avl: rotate left at {}", x.key);

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Restore |balance factor| <= 1 at `node`, whose children are already balanced
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().map_or(false, |left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        if node.right.as_ref().map_or(false, |right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Insert `key` below `link`, returning the new subtree root
///
/// `inserted` is set when a node was created. When it stays false nothing on
/// the path was modified, so heights and balance are left alone.
fn insert_at(link: Link, key: i32, inserted: &mut bool) -> Box<Node> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Node::leaf(key);
        }
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_at(node.left.take(), key, inserted)),
        Ordering::Greater => node.right = Some(insert_at(node.right.take(), key, inserted)),
        Ordering::Equal => return node,
    }

    if !*inserted {
        return node;
    }

    node.update_height();
    rebalance(node)
}

/// AVL tree over `i32` keys
#[derive(Clone, Debug, Default)]
pub struct BalancedTree {
    root: Link,
    size: usize,
}

impl BalancedTree {
    /// Create an empty tree
    pub fn new() -> Self {
        BalancedTree { root: None, size: 0 }
    }

    /// Insert a key
    ///
    /// Returns true if the key was new. A duplicate is a no-op.
    pub fn insert(&mut self, key: i32) -> bool {
        let mut inserted = false;
        self.root = Some(insert_at(self.root.take(), key, &mut inserted));
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Check whether `key` is present; never restructures the tree
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Cached height of the node holding `key`, or None if absent
    pub fn height_of(&self, key: i32) -> Option<usize> {
        self.find(key).map(|node| node.height)
    }

    /// Height of the whole tree (0 when empty)
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// All keys in ascending order
    pub fn keys(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();

        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    keys.push(node.key);
                    cur = node.right.as_deref();
                }
                None => break,
            }
        }

        keys
    }

    fn find(&self, key: i32) -> Option<&Node> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Walk the whole tree checking ordering, cached heights and balance.
    /// Returns the number of nodes seen.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> usize {
        fn check(link: &Link, lower: Option<i32>, upper: Option<i32>) -> (usize, usize) {
            let node = match link {
                Some(node) => node,
                None => return (0, 0),
            };
            if let Some(lower) = lower {
                assert!(node.key > lower, "key {} not above {}", node.key, lower);
            }
            if let Some(upper) = upper {
                assert!(node.key < upper, "key {} not below {}", node.key, upper);
            }

            let (left_height, left_count) = check(&node.left, lower, Some(node.key));
            let (right_height, right_count) = check(&node.right, Some(node.key), upper);

            assert_eq!(node.height, 1 + max(left_height, right_height), "stale height at {}", node.key);
            let balance = left_height as isize - right_height as isize;
            assert!((-1..=1).contains(&balance), "unbalanced at {}: {}", node.key, balance);

            (node.height, left_count + right_count + 1)
        }

        let (_, count) = check(&self.root, None, None);
        assert_eq!(count, self.size);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let tree = BalancedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(!tree.contains(0));
        assert_eq!(tree.height_of(0), None);
    }

    #[test]
    fn test_right_right_case() {
        let mut tree = BalancedTree::new();
        for key in [5, 10, 15] {
            assert!(tree.insert(key));
        }

        // single left rotation at the old root
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(10));
        assert_eq!(tree.height_of(10), Some(2));
        assert_eq!(tree.height_of(5), Some(1));
        assert_eq!(tree.height_of(15), Some(1));
        tree.check_invariants();
    }

    #[test]
    fn test_left_left_case() {
        let mut tree = BalancedTree::new();
        for key in [15, 10, 5] {
            tree.insert(key);
        }
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(10));
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_left_right_case() {
        let mut tree = BalancedTree::new();
        for key in [30, 10, 20] {
            tree.insert(key);
        }
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(20));
        assert_eq!(tree.keys(), vec![10, 20, 30]);
        tree.check_invariants();
    }

    #[test]
    fn test_right_left_case() {
        let mut tree = BalancedTree::new();
        for key in [10, 30, 20] {
            tree.insert(key);
        }
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(20));
        tree.check_invariants();
    }

    #[test]
    fn test_duplicate_is_noop() {
        let mut tree = BalancedTree::new();
        for key in [5, 10, 15] {
            tree.insert(key);
        }

        assert!(!tree.insert(10));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height_of(10), Some(2));
        tree.check_invariants();
    }

    #[test]
    fn test_sequential_inserts_stay_logarithmic() {
        let mut tree = BalancedTree::new();
        for key in 0..1023 {
            tree.insert(key);
            tree.check_invariants();
        }

        // a perfect tree of 1023 nodes has height 10
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.keys(), (0..1023).collect::<Vec<_>>());
    }

    #[test]
    fn test_negative_keys() {
        let mut tree = BalancedTree::new();
        for key in [-3, 7, -100, 0, i32::MIN, i32::MAX] {
            tree.insert(key);
        }
        assert!(tree.contains(i32::MIN));
        assert!(tree.contains(-100));
        assert!(!tree.contains(-4));
        assert_eq!(tree.keys(), vec![i32::MIN, -100, -3, 0, 7, i32::MAX]);
    }
}
