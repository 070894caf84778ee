// promo-console/src/render.rs

//! Search result rendering

use serde::Serialize;
use shared::ApiRevision;
use shared::models::Promotion;

use crate::form::FormState;

const CURRENT_COLUMNS: [&str; 10] = [
    "ID",
    "Name",
    "Code",
    "Value",
    "Type",
    "Description",
    "Active",
    "Scope",
    "Start Date",
    "End Date",
];

const LEGACY_COLUMNS: [&str; 6] = ["ID", "Name", "Type", "Active", "Scope", "Date"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// `row_{index}`, from the record's position in the response
    pub row_id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"promotions\">\n<thead>\n<tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str(&format!("<tr id=\"{}\">", escape_html(&row.row_id)));
            for cell in &row.cells {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }

    /// Column-aligned plain text
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = line(&self.headers);
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(&row.cells));
            out.push('\n');
        }
        out
    }
}

/// Turns a list response into a table
#[derive(Debug, Clone, Copy)]
pub struct ResultRenderer {
    revision: ApiRevision,
    promote_first: bool,
}

impl ResultRenderer {
    pub fn new(revision: ApiRevision, promote_first: bool) -> Self {
        Self {
            revision,
            promote_first,
        }
    }

    /// One row per record in response order; with `promote_first`, the
    /// first record is also applied to `form`.
    pub fn render(&self, records: &[Promotion], form: &mut FormState) -> ResultsTable {
        let headers = match self.revision {
            ApiRevision::Current => CURRENT_COLUMNS.as_slice(),
            ApiRevision::Legacy => LEGACY_COLUMNS.as_slice(),
        };

        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| ResultRow {
                row_id: format!("row_{}", i),
                cells: self.cells(record),
            })
            .collect();

        if self.promote_first
            && let Some(first) = records.first()
        {
            form.apply(first);
        }

        ResultsTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    fn cells(&self, p: &Promotion) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        match self.revision {
            ApiRevision::Current => vec![
                p.id.to_string(),
                opt(&p.name),
                opt(&p.code),
                p.value.map(|v| v.to_string()).unwrap_or_default(),
                opt(&p.promotion_type),
                opt(&p.description),
                p.active.to_string(),
                opt(&p.scope),
                opt(&p.start_date),
                opt(&p.end_date),
            ],
            ApiRevision::Legacy => vec![
                p.id.to_string(),
                opt(&p.name),
                opt(&p.promotion_type),
                p.active.to_string(),
                opt(&p.scope),
                opt(&p.start_date),
            ],
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PromotionDraft;

    fn record(id: i64, name: &str) -> Promotion {
        PromotionDraft {
            name: Some(name.to_string()),
            promotion_type: Some("PERCENTAGE".into()),
            active: true,
            ..Default::default()
        }
        .into_promotion(id)
    }

    #[test]
    fn test_rows_follow_response_order() {
        let records = vec![record(9, "B"), record(3, "A")];
        let mut form = FormState::default();
        let table = ResultRenderer::new(ApiRevision::Current, false).render(&records, &mut form);

        assert_eq!(table.headers.len(), 10);
        assert_eq!(table.rows[0].row_id, "row_0");
        assert_eq!(table.rows[0].cells[0], "9");
        assert_eq!(table.rows[1].row_id, "row_1");
        assert_eq!(table.rows[1].cells[1], "A");
        assert_eq!(form, FormState::default());
        assert_eq!(records[0].id, 9);
    }

    #[test]
    fn test_empty_input_leaves_form_alone() {
        let mut form = FormState {
            id: "4".into(),
            name: "keep".into(),
            ..Default::default()
        };
        let before = form.clone();
        let table = ResultRenderer::new(ApiRevision::Current, true).render(&[], &mut form);
        assert!(table.is_empty());
        assert!(!table.headers.is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn test_promote_first() {
        let records = vec![record(5, "FIRST"), record(6, "SECOND")];
        let mut form = FormState::default();
        ResultRenderer::new(ApiRevision::Legacy, true).render(&records, &mut form);
        assert_eq!(form.id, "5");
        assert_eq!(form.name, "FIRST");
        assert_eq!(form.active, "true");
    }

    #[test]
    fn test_legacy_columns() {
        let mut form = FormState::default();
        let table = ResultRenderer::new(ApiRevision::Legacy, false).render(&[record(1, "X")], &mut form);
        assert_eq!(table.headers, vec!["ID", "Name", "Type", "Active", "Scope", "Date"]);
        assert_eq!(table.rows[0].cells, vec!["1", "X", "PERCENTAGE", "true", "", ""]);
    }

    #[test]
    fn test_html_escapes_cells() {
        let mut form = FormState::default();
        let table = ResultRenderer::new(ApiRevision::Legacy, false)
            .render(&[record(1, "<b>\"A&B\"</b>")], &mut form);
        let html = table.to_html();
        assert!(html.contains("<tr id=\"row_0\">"));
        assert!(html.contains("<td>&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_text_is_aligned() {
        let mut form = FormState::default();
        let table = ResultRenderer::new(ApiRevision::Legacy, false)
            .render(&[record(12, "SPRING10")], &mut form);
        let text = table.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  Name      Type"));
        assert!(lines[2].starts_with("12  SPRING10  PERCENTAGE"));
    }
}
