use crate::{Error, Result};

/// Weighted quick-union with path compression over the sites `0..n`
///
/// `parent[r] == r` exactly for roots, and `size[r]` is the number of sites
/// whose root is `r`. Unions hang the smaller tree below the larger one, so
/// the forest never gains a cycle and trees stay shallow.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton components
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of components
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of sites
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the component containing `p`, compressing the path walked
    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut site = p;
        while site != root {
            let next = self.parent[site];
            self.parent[site] = root;
            site = next;
        }
        Ok(root)
    }

    /// Merges the components of `p` and `q`
    /// Returns false if they were already connected
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Number of sites in the component containing `p`
    pub fn component_size(&mut self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p >= self.parent.len() {
            return Err(Error::InvalidVertex(p));
        }
        Ok(())
    }
}
