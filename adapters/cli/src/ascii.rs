use std::io::Write;

use anyhow::{Context, Result};
use corridor_rendering::{Presentation, RenderingBackend};

/// Text backend that prints one glyph per cell followed by a label legend.
pub(crate) struct AsciiBackend<W> {
    writer: W,
}

impl<W: Write> AsciiBackend<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RenderingBackend for AsciiBackend<W> {
    fn present(&mut self, presentation: &Presentation) -> Result<()> {
        let scene = &presentation.scene;
        let mut text = String::new();
        text.push_str(&presentation.title);
        text.push('\n');

        for row in scene.grid.rows() {
            text.extend(row.iter().map(|class| class.glyph()));
            text.push('\n');
        }

        if !scene.labels.is_empty() {
            text.push_str("\nlabels:\n");
            for label in &scene.labels {
                text.push_str(&format!(
                    "  {:<10} {:<22} at {}\n",
                    label.text,
                    label.path.as_str(),
                    label.cell
                ));
            }
        }

        self.writer
            .write_all(text.as_bytes())
            .context("failed to write ascii maze")?;
        self.writer.flush().context("failed to flush ascii maze")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::{CellState, GridView, PathColor, PathId, PathSnapshot, Point};
    use corridor_rendering::{GridPresentation, Scene, CELL_SIZE_PX};

    #[test]
    fn renders_rows_and_visible_labels() {
        let cells = [
            CellState::Wall,
            CellState::Path,
            CellState::Entrance,
            CellState::Exit,
        ];
        let grid = GridPresentation::new(GridView::new(&cells, 2), CELL_SIZE_PX).expect("valid");
        let paths = vec![PathSnapshot {
            id: PathId::new("main_left"),
            label: "Alpha".to_owned(),
            visible: true,
            color: PathColor::DEFAULT,
            label_position: Some(Point::new(1, 0)),
        }];
        let presentation = Presentation::new("demo", Scene::new(grid, &paths), paths);

        let mut output = Vec::new();
        AsciiBackend::new(&mut output)
            .present(&presentation)
            .expect("rendering succeeds");
        let text = String::from_utf8(output).expect("utf-8 output");

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("demo"));
        assert_eq!(lines.next(), Some("#."));
        assert_eq!(lines.next(), Some("EX"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("main_left"));
        assert!(text.contains("(1, 0)"));
    }
}
