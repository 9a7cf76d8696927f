//! Data model for name-mapping trees.
//!
//! A [`MappingTree`] holds one name per namespace for every class, field,
//! method, parameter and local variable. Namespace 0 is the shared key
//! namespace that stays stable across versions; namespace 1 is the distinct,
//! human-authored namespace whose changes are diffed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Index of the shared (key) namespace.
pub const SHARED: usize = 0;

/// Index of the distinct (human-authored) namespace.
pub const DISTINCT: usize = 1;

/// A method parameter, keyed by its local-variable slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub lv_index: u32,
    pub names: Vec<String>,
}

impl ParameterEntry {
    pub fn new(lv_index: u32, names: Vec<String>) -> Self {
        Self { lv_index, names }
    }
}

/// A local variable, keyed by its local-variable slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalVariableEntry {
    pub lv_index: u32,
    /// Bytecode offset where the variable becomes live.
    #[serde(default)]
    pub lv_start_offset: u32,
    /// Index into the method's local variable table, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lvt_index: Option<u32>,
    pub names: Vec<String>,
}

impl LocalVariableEntry {
    pub fn new(lv_index: u32, names: Vec<String>) -> Self {
        Self {
            lv_index,
            lv_start_offset: 0,
            lvt_index: None,
            names,
        }
    }

    pub fn with_offsets(mut self, lv_start_offset: u32, lvt_index: Option<u32>) -> Self {
        self.lv_start_offset = lv_start_offset;
        self.lvt_index = lvt_index;
        self
    }
}

/// A field, keyed by its shared name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Field type descriptor in the shared namespace. Carried, never compared.
    #[serde(default)]
    pub descriptor: String,
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl FieldEntry {
    pub fn new(descriptor: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            names,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}

/// A method, keyed by its shared name together with its descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    /// Method descriptor in the shared namespace, treated as opaque.
    pub descriptor: String,
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_variables: Vec<LocalVariableEntry>,
}

impl MethodEntry {
    pub fn new(descriptor: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            names,
            ..Default::default()
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterEntry) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_local_variable(mut self, variable: LocalVariableEntry) -> Self {
        self.local_variables.push(variable);
        self
    }
}

/// A class, keyed by its shared name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldEntry>,
}

impl ClassEntry {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ..Default::default()
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_method(mut self, method: MethodEntry) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldEntry) -> Self {
        self.fields.push(field);
        self
    }
}

/// A complete mapping tree: header plus classes in authored order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTree {
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub major_version: u32,
    #[serde(default)]
    pub minor_version: u32,
    /// Extra header properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

impl MappingTree {
    pub fn new(namespaces: Vec<String>, classes: Vec<ClassEntry>) -> Self {
        Self {
            namespaces,
            major_version: 2,
            minor_version: 0,
            properties: BTreeMap::new(),
            classes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_keep_authored_order() {
        let class = ClassEntry::new(vec!["a/A".into(), "Alpha".into()])
            .with_field(FieldEntry::new("I", vec!["f".into(), "first".into()]))
            .with_field(FieldEntry::new("I", vec!["g".into(), "second".into()]))
            .with_method(MethodEntry::new("()V", vec!["m".into(), "run".into()]));

        assert_eq!(class.fields[0].names[DISTINCT], "first");
        assert_eq!(class.fields[1].names[DISTINCT], "second");
        assert_eq!(class.methods[0].names[SHARED], "m");
    }

    #[test]
    fn test_tree_deserializes_with_defaults() {
        let json = r#"{
            "namespaces": ["intermediary", "named"],
            "classes": [
                { "names": ["a/Foo", "Foo"], "methods": [
                    { "descriptor": "(I)V", "names": ["m", "bar"],
                      "parameters": [{ "lv_index": 1, "names": ["p", "count"] }] }
                ] }
            ]
        }"#;

        let tree: MappingTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.major_version, 0);
        assert!(tree.properties.is_empty());
        assert_eq!(tree.classes.len(), 1);

        let method = &tree.classes[0].methods[0];
        assert!(method.comments.is_empty());
        assert!(method.local_variables.is_empty());
        assert_eq!(method.parameters[0].lv_index, 1);
    }

    #[test]
    fn test_empty_collections_are_not_serialized() {
        let tree = MappingTree::new(
            vec!["intermediary".into(), "named".into()],
            vec![ClassEntry::new(vec!["a/Foo".into()])],
        );

        let json = serde_json::to_string(&tree).unwrap();
        assert!(!json.contains("comments"));
        assert!(!json.contains("properties"));
        assert!(json.contains("\"major_version\":2"));
    }
}
