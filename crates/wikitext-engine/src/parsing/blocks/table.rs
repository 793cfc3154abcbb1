use std::io::BufRead;

use log::trace;

use super::kinds::TableMarker;
use crate::parsing::{ParseError, Parser};
use crate::tree::{Node, NodeKind, TableCell, TableRow};

impl<R: BufRead> Parser<R> {
    /// Parses `{| params` up to `|}` or end of input.
    ///
    /// Rows are created lazily by their first cell, so `|-` with no cells
    /// after it never yields an empty row.
    pub(super) fn parse_table(&mut self) -> Result<Node, ParseError> {
        let start = self.total();
        let params = {
            let params = self.rest()[TableMarker::OPEN.len()..].trim();
            (!params.is_empty()).then(|| params.to_string())
        };
        self.open_tables += 1;
        self.next_line()?;

        let mut rows: Vec<TableRow> = vec![];
        let mut row_open = false;
        while let Some(remainder) = self.cursor.remainder() {
            let Some(offset) = remainder.find(TableMarker::CELL) else {
                self.next_line()?;
                continue;
            };
            let marker = self.pos() + offset;
            let tail = &remainder[offset..];

            if tail.starts_with(TableMarker::ROW_END) {
                self.seek(marker + TableMarker::ROW_END.len());
                if row_open && let Some(row) = rows.last_mut() {
                    row.span.end = self.total();
                }
                row_open = false;
            } else if tail.starts_with(TableMarker::CLOSE) {
                self.seek(marker + TableMarker::CLOSE.len());
                break;
            } else {
                let header = tail.starts_with(TableMarker::HEADER_CELL);
                let cell_start = self.total_at(marker);
                self.seek(marker + if header { 2 } else { 1 });
                if self.at(" ") {
                    self.skip(1);
                }
                let content = self.parse_block_list()?;
                let cell = TableCell {
                    header,
                    content,
                    span: self.span_from(cell_start),
                };
                if !row_open {
                    rows.push(TableRow::new(cell_start));
                    row_open = true;
                }
                if let Some(row) = rows.last_mut() {
                    row.push(cell);
                }
            }
        }
        self.open_tables -= 1;

        trace!("table with {} rows", rows.len());
        Ok(Node::new(
            NodeKind::Table { params, rows },
            self.span_from(start),
        ))
    }
}
