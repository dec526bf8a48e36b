//! Plain-text adjacency tables.
//!
//! [`AdjacencyTable`] prints a graph as a square table: a header row of vertex
//! labels, then one row per vertex holding `edge(row, col)` for every column.
//! Each column is right-aligned to its widest cell, the label column to the
//! widest label. Only read-only [`Graph`] operations are used, so rendering the
//! same graph twice gives the same text.
//!
//! ```
//! use dualgraph::graph::{add_edge, render, AdjacencyList, Undirected};
//!
//! let mut g: AdjacencyList<Undirected, &str> = AdjacencyList::new();
//! add_edge(&mut g, "a", "b").unwrap();
//! let text = render::table(&g).to_string();
//! assert_eq!(text, "      a     b \na false  true \nb  true false \n");
//! ```

use super::traits::Graph;
use core::fmt;

/// Borrowed view of a graph that renders as a table through [`fmt::Display`].
pub struct AdjacencyTable<'a, G> {
    graph: &'a G,
}

/// Wraps `graph` for display.
pub fn table<G: Graph>(graph: &G) -> AdjacencyTable<'_, G> {
    AdjacencyTable { graph }
}

impl<G> fmt::Display for AdjacencyTable<'_, G>
where
    G: Graph,
    G::Vertex: fmt::Display,
    G::Edge: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.graph.vertex_number();

        let mut labels = Vec::with_capacity(size);
        for i in 0..size {
            labels.push(self.graph.vertex(i).map_err(|_| fmt::Error)?.to_string());
        }
        let mut cells = Vec::with_capacity(size);
        for i in 0..size {
            let mut row = Vec::with_capacity(size);
            for j in 0..size {
                row.push(self.graph.edge(i, j).map_err(|_| fmt::Error)?.to_string());
            }
            cells.push(row);
        }

        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..size)
            .map(|j| {
                cells
                    .iter()
                    .map(|row| row[j].len())
                    .chain(core::iter::once(labels[j].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:>label_width$} ", "")?;
        for (label, &width) in labels.iter().zip(&widths) {
            write!(f, "{label:>width$} ")?;
        }
        writeln!(f)?;

        for (label, row) in labels.iter().zip(&cells) {
            write!(f, "{label:>label_width$} ")?;
            for (cell, &width) in row.iter().zip(&widths) {
                write!(f, "{cell:>width$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
