// ABOUTME: Places the fields of one record side by side on a single line.
// ABOUTME: Resolves per-field weight/width/array annotations into split cells.

use serde::{Deserialize, Serialize};

use crate::split::{split_cells, split_v, Cell, DEFAULT_SPACING};
use crate::Rect;

/// Width of each add/remove button drawn after an inline array
pub const BUTTON_WIDTH: f32 = 20.0;

/// Tint drawn behind a field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Highlight {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Array-valued field drawn inline: one cell per element, then the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayField {
    pub element_count: usize,
    pub hide_buttons: bool,
    /// Pinned length; the array can not grow or shrink, so no buttons
    pub fixed_length: Option<usize>,
}

impl ArrayField {
    pub fn len(&self) -> usize {
        self.fixed_length.unwrap_or(self.element_count)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shows_buttons(&self) -> bool {
        !self.hide_buttons && self.fixed_length.is_none()
    }
}

/// One field drawn on the line, with its optional sizing annotations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    pub weight: Option<f32>,
    pub width: Option<f32>,
    pub highlight: Option<Highlight>,
    /// Set for array-valued fields; sizing applies to each element
    pub array: Option<ArrayField>,
}

/// What a placed rect draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Value,
    Element(usize),
    AddButton,
    RemoveButton,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn array(name: impl Into<String>, element_count: usize) -> Self {
        Self {
            array: Some(ArrayField {
                element_count,
                ..ArrayField::default()
            }),
            ..Self::new(name)
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_highlight(mut self, r: f32, g: f32, b: f32) -> Self {
        self.highlight = Some(Highlight::new(r, g, b));
        self
    }

    /// No-op on non-array fields
    pub fn hide_buttons(mut self) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.hide_buttons = true;
        }
        self
    }

    /// No-op on non-array fields
    pub fn with_length(mut self, length: usize) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.fixed_length = Some(length);
        }
        self
    }

    /// Unannotated fields get weight 1. A fixed width alone opts out of the
    /// flexible share.
    pub fn cell(&self) -> Cell {
        let weight = match (self.weight, self.width) {
            (Some(weight), _) => weight,
            (None, Some(_)) => 0.0,
            (None, None) => 1.0,
        };
        Cell::new(weight, self.width.unwrap_or(0.0))
    }

    /// Cells this field occupies on the line, tagged with what they draw
    pub fn parts(&self) -> Vec<(Part, Cell)> {
        let Some(array) = self.array else {
            return vec![(Part::Value, self.cell())];
        };

        let mut parts: Vec<(Part, Cell)> =
            (0..array.len()).map(|i| (Part::Element(i), self.cell())).collect();
        if array.shows_buttons() {
            parts.push((Part::AddButton, Cell::fixed(BUTTON_WIDTH)));
            parts.push((Part::RemoveButton, Cell::fixed(BUTTON_WIDTH)));
        }
        parts
    }
}

/// One rect on the line and the field it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed<'a> {
    pub name: &'a str,
    pub part: Part,
    pub rect: Rect,
    pub highlight: Option<Highlight>,
}

/// Rects produced for one line
#[derive(Debug, Clone, PartialEq)]
pub struct LineRects<'a> {
    /// Prefix label column, absent when the label is hidden
    pub label: Option<Rect>,
    pub fields: Vec<Placed<'a>>,
}

impl<'a> LineRects<'a> {
    /// All rects placed for the field called `name`, in order
    pub fn of(&self, name: &str) -> Vec<&Placed<'a>> {
        self.fields.iter().filter(|p| p.name == name).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLayout {
    /// Gap between adjacent cells
    pub spacing: f32,
    /// Width of the prefix label column; `None` hides the label
    pub label_width: Option<f32>,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            label_width: None,
        }
    }
}

impl LineLayout {
    pub fn cells(fields: &[Field]) -> Vec<Cell> {
        fields
            .iter()
            .flat_map(|f| f.parts().into_iter().map(|(_, cell)| cell))
            .collect()
    }

    /// Lay out `fields` left to right across `rect`
    pub fn layout<'a>(&self, rect: Rect, fields: &'a [Field]) -> LineRects<'a> {
        let (label, content) = match self.label_width {
            Some(width) => {
                let [label, content] = rect.cut_from_left(width);
                (Some(label), content)
            }
            None => (None, rect),
        };

        let tagged: Vec<(&'a Field, Part, Cell)> = fields
            .iter()
            .flat_map(|f| f.parts().into_iter().map(move |(part, cell)| (f, part, cell)))
            .collect();
        let cells: Vec<Cell> = tagged.iter().map(|(_, _, cell)| *cell).collect();
        let rects = split_cells(content, &cells, self.spacing);

        LineRects {
            label,
            fields: tagged
                .into_iter()
                .zip(rects)
                .map(|((field, part, _), rect)| Placed {
                    name: field.name.as_str(),
                    part,
                    rect,
                    highlight: field.highlight,
                })
                .collect(),
        }
    }

    /// Stack one line per row, each `row_height` tall, top to bottom
    pub fn layout_rows<'a>(
        &self,
        rect: Rect,
        row_height: f32,
        rows: &'a [Vec<Field>],
    ) -> Vec<LineRects<'a>> {
        let heights = vec![row_height; rows.len()];
        let weights = vec![0.0; rows.len()];

        split_v(rect, &weights, Some(&heights), 0.0)
            .into_iter()
            .zip(rows)
            .map(|(row_rect, fields)| self.layout(row_rect, fields))
            .collect()
    }
}
