use std::io::Write;

use anyhow::{Context, Result};
use corridor_core::Point;
use corridor_rendering::{Presentation, RenderingBackend};
use serde::Serialize;

/// Backend that writes the grid and path list as a JSON document.
pub(crate) struct JsonBackend<W> {
    writer: W,
}

impl<W: Write> JsonBackend<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    title: &'a str,
    size: u32,
    cell_size: f32,
    rows: Vec<Vec<&'static str>>,
    paths: Vec<PathEntry<'a>>,
}

#[derive(Serialize)]
struct PathEntry<'a> {
    id: &'a str,
    label: &'a str,
    visible: bool,
    color: String,
    label_position: Option<Point>,
    label_offset: Option<[f32; 2]>,
}

impl<W: Write> RenderingBackend for JsonBackend<W> {
    fn present(&mut self, presentation: &Presentation) -> Result<()> {
        let grid = &presentation.scene.grid;
        let document = Document {
            title: &presentation.title,
            size: grid.size(),
            cell_size: grid.cell_size(),
            rows: grid
                .rows()
                .map(|row| row.iter().map(|class| class.css_class()).collect())
                .collect(),
            paths: presentation
                .paths
                .iter()
                .map(|path| PathEntry {
                    id: path.id.as_str(),
                    label: &path.label,
                    visible: path.visible,
                    color: path.color.to_string(),
                    label_position: path.label_position,
                    label_offset: path
                        .label_position
                        .map(|position| grid.offset_of(position).to_array()),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut self.writer, &document)
            .context("failed to serialize maze as json")?;
        writeln!(self.writer).context("failed to write json maze")?;
        self.writer.flush().context("failed to flush json maze")
    }
}
