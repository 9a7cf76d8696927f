//! Bottom-up change propagation from parameters up to classes.
//!
//! Each level is a pure function from an entry of tree A and its optional
//! counterpart in tree B to the entry that belongs in the output, if any.
//! Children are decided first; their results decide whether the parent must
//! be emitted, and whether it is emitted with its full names or truncated to
//! its shared name.

use tracing::trace;

use crate::differ::compare::{slot_change, EntryDelta, Mapped, Slotted};
use crate::differ::index::IndexedClass;
use crate::differ::summary::{Change, DiffSummary, EntryKind};
use crate::types::{ClassEntry, FieldEntry, MethodEntry};

/// An entry selected for the output tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emitted<T> {
    pub entry: T,
    pub change: Change,
    /// Counts for this entry and everything emitted beneath it.
    pub summary: DiffSummary,
}

impl<T> Emitted<T> {
    fn new(kind: EntryKind, entry: T, change: Change, mut summary: DiffSummary) -> Self {
        summary.record(kind, change);
        Self {
            entry,
            change,
            summary,
        }
    }

    /// An entry with no counterpart, copied verbatim with all its children.
    fn added(kind: EntryKind, entry: T) -> Self {
        Self::new(kind, entry, Change::Added, DiffSummary::new())
    }
}

/// Names and documentation for an emitted class or method.
///
/// When only descendants changed, names shrink to the shared name and
/// documentation is dropped, marking the entry as "structure only".
fn visible_identity<T: Mapped>(
    entry: &T,
    delta: EntryDelta,
) -> (Vec<String>, Vec<String>, Change) {
    if delta.is_changed() {
        (
            entry.names().to_vec(),
            entry.comments().to_vec(),
            Change::Updated,
        )
    } else {
        (vec![entry.shared_name().to_string()], Vec::new(), Change::Nested)
    }
}

/// Parameters or local variables of `entries` that differ from `others`.
fn changed_slots<T: Slotted + Clone>(
    kind: EntryKind,
    entries: &[T],
    others: &[T],
    summary: &mut DiffSummary,
) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| {
            let change = slot_change(entry, others)?;
            summary.record(kind, change);
            Some(entry.clone())
        })
        .collect()
}

/// Decide whether a field appears in the output.
///
/// Fields have no children, so an emitted field always keeps its full names
/// and documentation.
pub fn diff_field(
    field: &FieldEntry,
    other: Option<&FieldEntry>,
) -> Option<Emitted<FieldEntry>> {
    let change = match other {
        None => Change::Added,
        Some(other) if EntryDelta::between(field, other).is_changed() => Change::Updated,
        Some(_) => return None,
    };
    Some(Emitted::new(
        EntryKind::Field,
        field.clone(),
        change,
        DiffSummary::new(),
    ))
}

/// Decide whether a method appears in the output, and in which form.
pub fn diff_method(
    method: &MethodEntry,
    other: Option<&MethodEntry>,
) -> Option<Emitted<MethodEntry>> {
    let Some(other) = other else {
        return Some(Emitted::added(EntryKind::Method, method.clone()));
    };

    let delta = EntryDelta::between(method, other);
    let mut summary = DiffSummary::new();
    let parameters = changed_slots(
        EntryKind::Parameter,
        &method.parameters,
        &other.parameters,
        &mut summary,
    );
    let local_variables = changed_slots(
        EntryKind::LocalVariable,
        &method.local_variables,
        &other.local_variables,
        &mut summary,
    );

    if !delta.is_changed() && parameters.is_empty() && local_variables.is_empty() {
        return None;
    }

    let (names, comments, change) = visible_identity(method, delta);
    let entry = MethodEntry {
        descriptor: method.descriptor.clone(),
        names,
        comments,
        parameters,
        local_variables,
    };
    Some(Emitted::new(EntryKind::Method, entry, change, summary))
}

/// Decide whether a class appears in the output, and in which form.
///
/// The counterpart comes pre-indexed so its members are looked up by key.
pub fn diff_class(
    class: &ClassEntry,
    other: Option<&IndexedClass<'_>>,
) -> Option<Emitted<ClassEntry>> {
    let Some(IndexedClass {
        entry: other,
        members,
    }) = other
    else {
        trace!(class = class.shared_name(), "class has no counterpart");
        return Some(Emitted::added(EntryKind::Class, class.clone()));
    };

    let delta = EntryDelta::between(class, *other);
    let mut summary = DiffSummary::new();

    let fields: Vec<FieldEntry> = class
        .fields
        .iter()
        .filter_map(|field| diff_field(field, members.field(field.shared_name())))
        .map(|emitted| {
            summary.merge(&emitted.summary);
            emitted.entry
        })
        .collect();
    let methods: Vec<MethodEntry> = class
        .methods
        .iter()
        .filter_map(|method| {
            diff_method(
                method,
                members.method(method.shared_name(), &method.descriptor),
            )
        })
        .map(|emitted| {
            summary.merge(&emitted.summary);
            emitted.entry
        })
        .collect();

    if !delta.is_changed() && fields.is_empty() && methods.is_empty() {
        return None;
    }

    let (names, comments, change) = visible_identity(class, delta);
    trace!(
        class = class.shared_name(),
        change = change.as_str(),
        fields = fields.len(),
        methods = methods.len(),
        "class emitted"
    );
    let entry = ClassEntry {
        names,
        comments,
        methods,
        fields,
    };
    Some(Emitted::new(EntryKind::Class, entry, change, summary))
}
