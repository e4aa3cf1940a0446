use std::str::FromStr;

use crate::{Detached, Error, Value, codec};

/// Owner of one parsed JSON tree.
///
/// The number of direct elements (or members) of the root is cached when the
/// tree is installed and bounds every entry index handed to the resolver.
/// The cache is not refreshed when the root is edited through
/// [`Document::root_mut`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Option<Value>,
    cardinality: usize,
}

impl Document {
    /// An empty document. Every entry index is out of bounds until content
    /// is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let mut document = Self::new();
        document.load(bytes)?;
        Ok(document)
    }

    pub fn from_detached(tree: Detached) -> Result<Self, Error> {
        let mut document = Self::new();
        document.adopt(tree)?;
        Ok(document)
    }

    /// Parses `bytes` and replaces the current tree with the result.
    ///
    /// On failure the previous tree is released as well and the document is
    /// left empty.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), Error> {
        match codec::parse(bytes) {
            Ok(root) => {
                self.install(root);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("discarding document: {}", e);
                self.clear();
                Err(e)
            }
        }
    }

    /// Takes ownership of a tree split off another document (or built by
    /// hand) and makes it the root.
    pub fn adopt(&mut self, tree: Detached) -> Result<(), Error> {
        let root = tree.into_inner();
        if let Err(reason) = root.validate() {
            tracing::warn!("refusing to adopt tree: {}", reason);
            self.clear();
            return Err(Error::ParseFailure(reason));
        }

        self.install(root);
        Ok(())
    }

    /// Releases the root, leaving the document empty.
    pub fn take(&mut self) -> Option<Detached> {
        self.cardinality = 0;
        self.root.take().map(Detached::new)
    }

    pub fn clear(&mut self) {
        self.take();
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    /// Direct elements of an array root or members of an object root, as
    /// counted when the root was installed. Zero for scalar roots.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    /// Mutable access to the root. Edits made here do not update
    /// [`Document::cardinality`].
    pub fn root_mut(&mut self) -> Option<&mut Value> {
        self.root.as_mut()
    }

    /// Element `index` of an array root.
    pub fn item(&self, index: usize) -> Option<&Value> {
        self.root.as_ref()?.index(index)
    }

    /// Pretty-printed JSON of the whole tree; empty when nothing is loaded.
    pub fn dump(&self) -> String {
        self.root.as_ref().map(codec::print).unwrap_or_default()
    }

    fn install(&mut self, root: Value) {
        self.cardinality = root.len();
        tracing::debug!(cardinality = self.cardinality, "installed document root");
        // The old tree is dropped by this assignment.
        self.root = Some(root);
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl TryFrom<Detached> for Document {
    type Error = Error;

    fn try_from(tree: Detached) -> Result<Self, Self::Error> {
        Self::from_detached(tree)
    }
}
