//! Named paths, their visibility flags, and id/label lookup.

use std::collections::{BTreeSet, HashMap};

use corridor_core::{BuildError, CellCoord, LookupError, PathColor, PathId, Segment};

/// A named, independently toggled run of segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    id: PathId,
    label: String,
    segments: Vec<Segment>,
    visible: bool,
    color: PathColor,
    cells: BTreeSet<CellCoord>,
}

impl Path {
    /// Unique identifier of the path.
    #[must_use]
    pub fn id(&self) -> &PathId {
        &self.id
    }

    /// Display label of the path.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Segments fixed at build time, in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the path is drawn on the next rebuild.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Display color of the path.
    #[must_use]
    pub const fn color(&self) -> PathColor {
        self.color
    }

    /// Cells the path held after the most recent rebuild.
    ///
    /// Empty while the path is hidden.
    #[must_use]
    pub fn cells(&self) -> &BTreeSet<CellCoord> {
        &self.cells
    }

    /// Segments together with the cell set they are rasterized into.
    pub(crate) fn drawing_parts(&mut self) -> (&[Segment], &mut BTreeSet<CellCoord>) {
        (&self.segments, &mut self.cells)
    }
}

/// Ordered collection of paths with id and case-insensitive label lookup.
#[derive(Clone, Debug, Default)]
pub struct PathRegistry {
    paths: Vec<Path>,
    ids: HashMap<PathId, usize>,
    labels: HashMap<String, usize>,
}

impl PathRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a visible path with the default color.
    ///
    /// Fails when the id, or the label ignoring case, is already taken.
    pub fn register(
        &mut self,
        id: PathId,
        label: impl Into<String>,
        segments: Vec<Segment>,
    ) -> Result<&Path, BuildError> {
        let label = label.into();
        let folded = label.to_lowercase();

        if self.ids.contains_key(&id) {
            return Err(BuildError::DuplicatePathId { id });
        }
        if self.labels.contains_key(&folded) {
            return Err(BuildError::DuplicateLabel { label });
        }

        let index = self.paths.len();
        let _ = self.ids.insert(id.clone(), index);
        let _ = self.labels.insert(folded, index);
        self.paths.push(Path {
            id,
            label,
            segments,
            visible: true,
            color: PathColor::DEFAULT,
            cells: BTreeSet::new(),
        });
        Ok(&self.paths[index])
    }

    /// Resolves an exact id first, then a case-insensitive label.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<&PathId> {
        self.ids
            .get_key_value(&PathId::new(query))
            .map(|(id, _)| id)
            .or_else(|| self.resolve_label(query))
    }

    /// Resolves a label, ignoring case.
    #[must_use]
    pub fn resolve_label(&self, label: &str) -> Option<&PathId> {
        self.labels
            .get(&label.to_lowercase())
            .map(|index| &self.paths[*index].id)
    }

    /// Flips the visibility of the matching path.
    ///
    /// Nothing changes when the query matches no path.
    pub fn toggle(&mut self, query: &str) -> Result<PathId, LookupError> {
        let Some(id) = self.resolve(query).cloned() else {
            return Err(LookupError::NotFound {
                query: query.to_owned(),
            });
        };
        if let Some(path) = self.get_mut(&id) {
            path.visible = !path.visible;
        }
        Ok(id)
    }

    /// Forces every path to the provided visibility.
    ///
    /// Returns the ids whose flag actually changed, in registration order.
    pub fn set_all_visibility(&mut self, visible: bool) -> Vec<PathId> {
        self.paths
            .iter_mut()
            .filter(|path| path.visible != visible)
            .map(|path| {
                path.visible = visible;
                path.id.clone()
            })
            .collect()
    }

    /// Looks a path up by exact id.
    #[must_use]
    pub fn get(&self, id: &PathId) -> Option<&Path> {
        self.ids.get(id).map(|index| &self.paths[*index])
    }

    fn get_mut(&mut self, id: &PathId) -> Option<&mut Path> {
        let index = *self.ids.get(id)?;
        self.paths.get_mut(index)
    }

    /// Iterator over the paths in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Path> {
        self.paths.iter_mut()
    }

    /// Number of registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Reports whether no path has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of paths currently flagged visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.paths.iter().filter(|path| path.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::Point;

    fn registry() -> PathRegistry {
        let mut registry = PathRegistry::new();
        let segment = Segment::new(Point::new(0, 0), Point::new(3, 0)).expect("aligned");
        let _ = registry
            .register(PathId::new("main_left"), "Alpha", vec![segment])
            .expect("first path");
        let _ = registry
            .register(PathId::new("main_right"), "Bravo", Vec::new())
            .expect("second path");
        registry
    }

    #[test]
    fn registered_paths_start_visible_with_default_color() {
        let registry = registry();
        let path = registry.get(&PathId::new("main_left")).expect("registered");

        assert!(path.is_visible());
        assert_eq!(path.color(), PathColor::DEFAULT);
        assert_eq!(path.label(), "Alpha");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicate_ids_and_labels_are_rejected() {
        let mut registry = registry();

        assert_eq!(
            registry
                .register(PathId::new("main_left"), "Other", Vec::new())
                .map(|path| path.id().clone()),
            Err(BuildError::DuplicatePathId {
                id: PathId::new("main_left"),
            })
        );
        assert_eq!(
            registry
                .register(PathId::new("other"), "ALPHA", Vec::new())
                .map(|path| path.id().clone()),
            Err(BuildError::DuplicateLabel {
                label: "ALPHA".to_owned(),
            })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn exact_id_takes_precedence_over_labels() {
        let mut registry = PathRegistry::new();
        let _ = registry
            .register(PathId::new("bravo"), "Alpha", Vec::new())
            .expect("first path");
        let _ = registry
            .register(PathId::new("other"), "Bravo", Vec::new())
            .expect("second path");

        assert_eq!(registry.resolve("bravo"), Some(&PathId::new("bravo")));
        assert_eq!(registry.resolve("BRAVO"), Some(&PathId::new("other")));
        assert_eq!(registry.resolve_label("bravo"), Some(&PathId::new("other")));
    }

    #[test]
    fn toggle_reports_missing_paths_without_mutation() {
        let mut registry = registry();

        assert_eq!(
            registry.toggle("nowhere"),
            Err(LookupError::NotFound {
                query: "nowhere".to_owned(),
            })
        );
        assert_eq!(registry.visible_count(), 2);

        assert_eq!(registry.toggle("bravo"), Ok(PathId::new("main_right")));
        assert_eq!(registry.visible_count(), 1);
    }

    #[test]
    fn set_all_reports_only_changed_paths() {
        let mut registry = registry();
        let _ = registry.toggle("main_left").expect("known path");

        assert_eq!(
            registry.set_all_visibility(false),
            vec![PathId::new("main_right")]
        );
        assert!(registry.set_all_visibility(false).is_empty());
        assert_eq!(registry.set_all_visibility(true).len(), 2);
    }

    #[test]
    fn drawing_parts_write_into_the_path_cell_set() {
        let mut registry = registry();
        let path = registry.iter_mut().next().expect("first path");

        let (segments, cells) = path.drawing_parts();
        assert_eq!(segments.len(), 1);
        let _ = cells.insert(CellCoord::new(2, 0));

        assert_eq!(path.segments().len(), 1);
        assert!(path.cells().contains(&CellCoord::new(2, 0)));
    }
}
