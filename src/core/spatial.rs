//! Spatial-Index (KD-Tree) über Element-Mittelpunkten für schnelles Picking.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::{Element, ElementId};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Elements
    pub element_id: ElementId,
    /// Euklidische Distanz Mittelpunkt ↔ Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Elementen eines Diagramms.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    element_ids: Vec<ElementId>,
    max_half_extent: f32,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            element_ids: Vec::new(),
            max_half_extent: 0.0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Elementen.
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut element_ids = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut max_half_extent = 0.0_f32;

        for element in elements {
            element_ids.push(element.id);
            entries.push([element.position.x as f64, element.position.y as f64]);
            max_half_extent = max_half_extent.max(element.half_extent());
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            element_ids,
            max_half_extent,
        }
    }

    /// Gibt die Anzahl indexierter Elemente zurück.
    pub fn len(&self) -> usize {
        self.element_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Elemente im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty()
    }

    /// Größte halbe Körperdiagonale aller indexierten Elemente.
    pub fn max_half_extent(&self) -> f32 {
        self.max_half_extent
    }

    /// Findet alle Elemente, deren Mittelpunkt innerhalb des Radius liegt (sortiert).
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64],
                (radius * radius) as f64,
            )
            .into_iter()
            .filter_map(|entry| {
                let element_id = *self.element_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    element_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Elemente, deren Körper den Suchpunkt mit Toleranz erreichen könnte.
    pub fn candidates_near(&self, query: Vec2, tolerance: f32) -> Vec<ElementId> {
        self.within_radius(query, self.max_half_extent + tolerance)
            .into_iter()
            .map(|m| m.element_id)
            .collect()
    }
}
