//! Python bindings for the two hash tables

use pyo3::prelude::*;

use keyset_core::{ChainedHashTable, ProbingHashTable, Slot};

use crate::{capacity_from, to_py_err, PyTableSizing};

/// Hash table with separate chaining
///
/// # Example (Python)
/// ```python
/// table = ChainedHashTable(10)
/// for key in (5, 15, 25):
///     table.insert(key)
/// table.chain(5)    # [5, 15, 25]
/// table.chain(-1)   # []
/// ```
#[pyclass(name = "ChainedHashTable")]
pub struct PyChainedHashTable {
    table: ChainedHashTable,
}

#[pymethods]
impl PyChainedHashTable {
    /// Create a table with `capacity` buckets (must be positive)
    #[new]
    fn new(capacity: i64) -> PyResult<Self> {
        let table = ChainedHashTable::new(capacity_from(capacity)?).map_err(to_py_err)?;
        Ok(PyChainedHashTable { table })
    }

    #[staticmethod]
    fn with_sizing(sizing: PyRef<'_, PyTableSizing>) -> PyResult<Self> {
        let table = ChainedHashTable::with_sizing(&sizing.sizing).map_err(to_py_err)?;
        Ok(PyChainedHashTable { table })
    }

    fn insert(&mut self, key: i32) -> bool {
        self.table.insert(key)
    }

    fn contains(&self, key: i32) -> bool {
        self.table.contains(key)
    }

    /// Keys of one bucket in insertion order; [] for any out-of-range index
    fn chain(&self, index: i64) -> Vec<i32> {
        match usize::try_from(index) {
            Ok(index) => self.table.chain(index).to_vec(),
            Err(_) => Vec::new(),
        }
    }

    fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    fn longest_chain(&self) -> usize {
        self.table.longest_chain()
    }

    fn __len__(&self) -> usize {
        self.table.len()
    }

    fn __contains__(&self, key: i32) -> bool {
        self.table.contains(key)
    }

    fn __repr__(&self) -> String {
        format!(
            "ChainedHashTable(len={}, buckets={})",
            self.table.len(),
            self.table.capacity()
        )
    }
}

/// Hash table with quadratic probing
///
/// `insert` raises RuntimeError when the probe walk finds no free slot.
#[pyclass(name = "ProbingHashTable")]
pub struct PyProbingHashTable {
    table: ProbingHashTable,
}

#[pymethods]
impl PyProbingHashTable {
    /// Create a table with `capacity` slots (must be positive)
    #[new]
    fn new(capacity: i64) -> PyResult<Self> {
        let table = ProbingHashTable::new(capacity_from(capacity)?).map_err(to_py_err)?;
        Ok(PyProbingHashTable { table })
    }

    #[staticmethod]
    fn with_sizing(sizing: PyRef<'_, PyTableSizing>) -> PyResult<Self> {
        let table = ProbingHashTable::with_sizing(&sizing.sizing).map_err(to_py_err)?;
        Ok(PyProbingHashTable { table })
    }

    fn insert(&mut self, key: i32) -> PyResult<bool> {
        self.table.insert(key).map_err(to_py_err)
    }

    fn contains(&self, key: i32) -> bool {
        self.table.contains(key)
    }

    /// Slot index holding `key`, or None
    fn index_of(&self, key: i32) -> Option<usize> {
        self.table.index_of(key)
    }

    /// Slot state as "empty", "tombstone" or the stored key
    fn slot(&self, py: Python<'_>, index: usize) -> Option<PyObject> {
        self.table.slot(index).map(|slot| match slot {
            Slot::Empty => "empty".into_py(py),
            Slot::Tombstone => "tombstone".into_py(py),
            Slot::Occupied(key) => key.into_py(py),
        })
    }

    fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    fn __len__(&self) -> usize {
        self.table.len()
    }

    fn __contains__(&self, key: i32) -> bool {
        self.table.contains(key)
    }

    fn __repr__(&self) -> String {
        format!(
            "ProbingHashTable(len={}, slots={}, load_factor={:.3})",
            self.table.len(),
            self.table.capacity(),
            self.table.load_factor()
        )
    }
}
