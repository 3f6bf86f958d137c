//! Geordnete Auswahl von Elementen und Linien.

use indexmap::IndexSet;

use crate::core::{ElementId, ObjectRef};

/// Geordnete Menge selektierter Objekte; der erste Eintrag ist das Primärobjekt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    objects: IndexSet<ObjectRef>,
}

impl Selection {
    /// Erstellt eine leere Auswahl.
    pub fn new() -> Self {
        Self {
            objects: IndexSet::new(),
        }
    }

    /// Ersetzt die Auswahl durch genau ein Objekt.
    pub fn select_only(&mut self, object: ObjectRef) {
        self.objects.clear();
        self.objects.insert(object);
    }

    /// Fügt ein Objekt hinzu. Gibt `false` zurück, wenn es schon selektiert war.
    pub fn add(&mut self, object: ObjectRef) -> bool {
        self.objects.insert(object)
    }

    /// Entfernt ein Objekt unter Beibehaltung der Reihenfolge.
    pub fn remove(&mut self, object: ObjectRef) -> bool {
        self.objects.shift_remove(&object)
    }

    pub fn contains(&self, object: ObjectRef) -> bool {
        self.objects.contains(&object)
    }

    /// Primärobjekt für Einzel-Ziel-Modi
    pub fn primary(&self) -> Option<ObjectRef> {
        self.objects.first().copied()
    }

    /// Alle selektierten Elemente in Auswahlreihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.objects.iter().filter_map(|object| match object {
            ObjectRef::Element(id) => Some(*id),
            ObjectRef::Line(_) => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectRef> + '_ {
        self.objects.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
