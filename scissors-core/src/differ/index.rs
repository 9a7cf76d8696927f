//! Key indexes for cross-tree lookup.
//!
//! Classes and fields are keyed by their shared name, methods by their
//! shared name together with their descriptor. Building an index rejects
//! duplicate keys, since matching assumes they are unique.

use std::collections::HashMap;

use crate::differ::compare::Mapped;
use crate::error::{DiffError, Result};
use crate::types::{ClassEntry, FieldEntry, MappingTree, MethodEntry};

/// Classes of one tree by shared name, each with its member index.
#[derive(Debug, Default)]
pub struct ClassIndex<'a> {
    classes: HashMap<&'a str, IndexedClass<'a>>,
}

impl<'a> ClassIndex<'a> {
    pub fn build(tree: &'a MappingTree) -> Result<Self> {
        let mut classes = HashMap::with_capacity(tree.classes.len());
        for class in &tree.classes {
            let key = class.shared_name();
            if classes.insert(key, IndexedClass::build(class)?).is_some() {
                return Err(DiffError::duplicate("class", key, None));
            }
        }
        Ok(Self { classes })
    }

    pub fn get(&self, key: &str) -> Option<&IndexedClass<'a>> {
        self.classes.get(key)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A class together with the index of its members.
#[derive(Debug)]
pub struct IndexedClass<'a> {
    pub entry: &'a ClassEntry,
    pub members: MemberIndex<'a>,
}

impl<'a> IndexedClass<'a> {
    pub fn build(entry: &'a ClassEntry) -> Result<Self> {
        Ok(Self {
            entry,
            members: MemberIndex::build(entry)?,
        })
    }
}

/// Fields and methods of one class.
#[derive(Debug, Default)]
pub struct MemberIndex<'a> {
    fields: HashMap<&'a str, &'a FieldEntry>,
    methods: HashMap<(&'a str, &'a str), &'a MethodEntry>,
}

impl<'a> MemberIndex<'a> {
    pub fn build(class: &'a ClassEntry) -> Result<Self> {
        let owner = class.shared_name();

        let mut fields = HashMap::with_capacity(class.fields.len());
        for field in &class.fields {
            let key = field.shared_name();
            if fields.insert(key, field).is_some() {
                return Err(DiffError::duplicate("field", key, Some(owner)));
            }
        }

        let mut methods = HashMap::with_capacity(class.methods.len());
        for method in &class.methods {
            let key = (method.shared_name(), method.descriptor.as_str());
            if methods.insert(key, method).is_some() {
                return Err(DiffError::duplicate(
                    "method",
                    &format!("{}{}", key.0, key.1),
                    Some(owner),
                ));
            }
        }

        Ok(Self { fields, methods })
    }

    pub fn field(&self, name: &str) -> Option<&'a FieldEntry> {
        self.fields.get(name).copied()
    }

    pub fn method(&self, name: &str, descriptor: &str) -> Option<&'a MethodEntry> {
        self.methods.get(&(name, descriptor)).copied()
    }
}
