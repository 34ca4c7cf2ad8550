use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use keyset_core::{AdaptiveTree, BalancedTree, KeysetError, Scale, TableSizing};

mod table_bindings;
use table_bindings::{PyChainedHashTable, PyProbingHashTable};

/// Map a core error onto the matching Python exception
///
/// Configuration problems raise ValueError; a full table raises RuntimeError.
pub(crate) fn to_py_err(err: KeysetError) -> PyErr {
    match err {
        KeysetError::TableFull { .. } => PyRuntimeError::new_err(err.to_string()),
        KeysetError::InvalidCapacity { .. } | KeysetError::InvalidScale { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Convert a Python capacity, rejecting zero and negative values
pub(crate) fn capacity_from(capacity: i64) -> PyResult<usize> {
    usize::try_from(capacity)
        .ok()
        .filter(|&c| c > 0)
        .ok_or_else(|| PyValueError::new_err(format!("Invalid capacity: {} (must be positive)", capacity)))
}

/// AVL tree of integer keys
///
/// # Example (Python)
/// ```python
/// tree = BalancedTree()
/// for key in (5, 10, 15):
///     tree.insert(key)
/// tree.height_of(10)   # 2
/// ```
#[pyclass(name = "BalancedTree")]
#[derive(Default)]
pub struct PyBalancedTree {
    tree: BalancedTree,
}

#[pymethods]
impl PyBalancedTree {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Insert a key; returns False for a duplicate
    fn insert(&mut self, key: i32) -> bool {
        self.tree.insert(key)
    }

    fn contains(&self, key: i32) -> bool {
        self.tree.contains(key)
    }

    /// Cached height of the node holding `key`, or None
    fn height_of(&self, key: i32) -> Option<usize> {
        self.tree.height_of(key)
    }

    fn height(&self) -> usize {
        self.tree.height()
    }

    fn keys(&self) -> Vec<i32> {
        self.tree.keys()
    }

    fn __len__(&self) -> usize {
        self.tree.len()
    }

    fn __contains__(&self, key: i32) -> bool {
        self.tree.contains(key)
    }

    fn __repr__(&self) -> String {
        format!("BalancedTree(len={}, height={})", self.tree.len(), self.tree.height())
    }
}

/// Splay tree of integer keys
///
/// Lookups restructure the tree: the key found (or the last key visited on
/// a miss) becomes the root.
#[pyclass(name = "AdaptiveTree")]
#[derive(Default)]
pub struct PyAdaptiveTree {
    tree: AdaptiveTree,
}

#[pymethods]
impl PyAdaptiveTree {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Insert a key and splay it to the root; returns False for a duplicate
    fn insert(&mut self, key: i32) -> bool {
        self.tree.insert(key)
    }

    fn contains(&mut self, key: i32) -> bool {
        self.tree.contains(key)
    }

    /// Keys in pre-order
    fn traverse(&self) -> Vec<i32> {
        self.tree.traverse()
    }

    fn root(&self) -> Option<i32> {
        self.tree.root()
    }

    fn keys(&self) -> Vec<i32> {
        self.tree.keys()
    }

    fn __len__(&self) -> usize {
        self.tree.len()
    }

    fn __contains__(&mut self, key: i32) -> bool {
        self.tree.contains(key)
    }

    fn __repr__(&self) -> String {
        match self.tree.root() {
            Some(root) => format!("AdaptiveTree(len={}, root={})", self.tree.len(), root),
            None => "AdaptiveTree(len=0)".to_string(),
        }
    }
}

/// Capacities for one workload scale
#[pyclass(name = "TableSizing")]
#[derive(Clone, Debug)]
pub struct PyTableSizing {
    pub(crate) sizing: TableSizing,
}

#[pymethods]
impl PyTableSizing {
    #[new]
    fn new(key_count: usize, chaining_buckets: usize, probing_slots: usize) -> PyResult<Self> {
        let sizing = TableSizing::new(key_count, chaining_buckets, probing_slots).map_err(to_py_err)?;
        Ok(PyTableSizing { sizing })
    }

    /// Preset for "small", "medium" or "large"
    #[staticmethod]
    fn for_scale(name: &str) -> PyResult<Self> {
        let scale: Scale = name.parse().map_err(to_py_err)?;
        Ok(PyTableSizing {
            sizing: TableSizing::for_scale(scale),
        })
    }

    /// Read KEYSET_SCALE / KEYSET_CHAINING_BUCKETS / KEYSET_PROBING_SLOTS
    #[staticmethod]
    fn from_env() -> PyResult<Self> {
        let sizing = TableSizing::from_env().map_err(to_py_err)?;
        Ok(PyTableSizing { sizing })
    }

    #[getter]
    fn key_count(&self) -> usize {
        self.sizing.key_count
    }

    #[getter]
    fn chaining_buckets(&self) -> usize {
        self.sizing.chaining_buckets
    }

    #[getter]
    fn probing_slots(&self) -> usize {
        self.sizing.probing_slots
    }

    fn __repr__(&self) -> String {
        format!(
            "TableSizing(key_count={}, chaining_buckets={}, probing_slots={})",
            self.sizing.key_count, self.sizing.chaining_buckets, self.sizing.probing_slots
        )
    }
}

/// Python module
#[pymodule]
fn keyset_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Ordered containers
    m.add_class::<PyBalancedTree>()?;
    m.add_class::<PyAdaptiveTree>()?;

    // Hash tables
    m.add_class::<PyChainedHashTable>()?;
    m.add_class::<PyProbingHashTable>()?;
    m.add_class::<PyTableSizing>()?;

    Ok(())
}
