//! Table model of a warehouse search page.
//!
//! The page is reduced to its `<tr>` rows and `<td>` cells in document order.
//! Nothing else on the page matters to the extractors.

use std::collections::HashMap;

use scraper::{ElementRef, Html};

/// A `<td>` text token with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Index of the nearest enclosing row, if the cell sits inside one.
    pub row: Option<usize>,
    /// Position among that row's cells.
    pub column: usize,
    /// Trimmed text content.
    pub text: String,
}

/// A `<tr>` with every `<td>` below it, nested tables included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
    /// Untrimmed concatenated text of the whole row.
    pub text: String,
    /// Index of the next `<tr>` sharing this row's parent.
    pub next_sibling: Option<usize>,
}

/// Immutable snapshot of one search result page.
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    rows: Vec<Row>,
    cells: Vec<Cell>,
}

impl InventoryPage {
    /// Builds the table model from raw HTML.
    ///
    /// Parsing is lenient: malformed markup produces whatever rows the HTML
    /// parser recovers, and a document without tables produces an empty page.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let row_elements: Vec<ElementRef<'_>> = elements_named(root, "tr").collect();
        let row_index: HashMap<_, usize> = row_elements
            .iter()
            .enumerate()
            .map(|(idx, tr)| (tr.id(), idx))
            .collect();

        let mut column_index = HashMap::new();
        let mut rows = Vec::with_capacity(row_elements.len());

        for (idx, tr) in row_elements.iter().enumerate() {
            let mut cells = Vec::new();
            for (column, td) in elements_named(*tr, "td").enumerate() {
                if enclosing_row(td).map(|r| r.id()) == Some(tr.id()) {
                    column_index.insert(td.id(), column);
                }
                cells.push(element_text(td));
            }

            let next_sibling = tr
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|sibling| sibling.value().name() == "tr")
                .and_then(|sibling| row_index.get(&sibling.id()).copied());

            rows.push(Row {
                cells,
                text: tr.text().collect(),
                next_sibling,
            });
        }

        let cells = elements_named(root, "td")
            .map(|td| Cell {
                row: enclosing_row(td).and_then(|tr| row_index.get(&tr.id()).copied()),
                column: column_index.get(&td.id()).copied().unwrap_or(0),
                text: element_text(td),
            })
            .collect();

        Self { rows, cells }
    }

    /// Builds a page from plain rows of cell text, each row the next sibling
    /// of the one before it.
    #[must_use]
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::default();
        for (idx, row) in rows.into_iter().enumerate() {
            let cells: Vec<String> = row
                .into_iter()
                .map(|text| {
                    let text: String = text.into();
                    text.trim().to_string()
                })
                .collect();
            for (column, text) in cells.iter().enumerate() {
                page.cells.push(Cell {
                    row: Some(idx),
                    column,
                    text: text.clone(),
                });
            }
            if let Some(previous) = page.rows.last_mut() {
                previous.next_sibling = Some(idx);
            }
            page.rows.push(Row {
                text: cells.concat(),
                cells,
                next_sibling: None,
            });
        }
        page
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cells.is_empty()
    }
}

fn elements_named<'a>(
    scope: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

fn enclosing_row(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "tr")
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
