//! Terminal Output
//!
//! Plain-text rendering of the view screens for the CLI. Uses the same table
//! model as the web views, so defaults, ranks and medals read identically.

use octofit_core::{Align, Screen, Table};

/// Padded text table with a header rule
pub fn render_table(table: &Table) -> String {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| display_width(&cell.text))
                .chain(std::iter::once(display_width(column.title)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| pad(column.title, width, column.align))
        .collect();
    push_line(&mut out, &header.join(" | "));

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule.join("-+-"));

    for row in &table.rows {
        let cells: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (column, &width))| {
                let text = row.cells.get(i).map(|c| c.text.as_str()).unwrap_or("");
                pad(text, width, column.align)
            })
            .collect();
        push_line(&mut out, &cells.join(" | "));
    }

    out
}

/// Full text for a screen, as the web view would show it
pub fn render_screen(screen: &Screen) -> String {
    match screen {
        Screen::Spinner { label } => format!("{}\n", label),
        Screen::Error { message } => format!("Error: {}\n", message),
        Screen::Empty { headline, hint } => format!("{} {}\n", headline, hint),
        Screen::Table { heading, table } => format!("{}\n\n{}", heading, render_table(table)),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(display_width(text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofit_core::{Collection, ViewStatus};
    use serde_json::json;

    #[test]
    fn test_render_table_aligns_columns() {
        let items = vec![
            json!({ "id": 1, "name": "Marvel", "members_count": 2 }),
            json!({ "id": 2, "name": "DC" }),
        ];
        let text = render_table(&Collection::Teams.table(&items));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID | Team Name"));
        assert!(lines[1].starts_with("---+-"));
        assert!(lines[3].contains("DC"));
        assert!(lines[3].contains("N/A"));
        assert!(lines[3].ends_with('0'));
    }

    #[test]
    fn test_render_screens() {
        let mut status = ViewStatus::Loading;
        assert_eq!(
            render_screen(&status.screen(Collection::Users)),
            "Loading users...\n"
        );

        status.resolve(Ok(vec![]));
        assert_eq!(
            render_screen(&status.screen(Collection::Teams)),
            "No teams found. Create a team to start competing!\n"
        );

        let mut failed = ViewStatus::Loading;
        failed.resolve(Err(octofit_core::FetchError::Status(500)));
        assert_eq!(
            render_screen(&failed.screen(Collection::Workouts)),
            "Error: HTTP error! status: 500\n"
        );
    }

    #[test]
    fn test_render_leaderboard_heading_and_ranks() {
        let items = vec![json!({ "username": "alice", "points": 120 })];
        let mut status = ViewStatus::Loading;
        status.resolve(Ok(items));

        let text = render_screen(&status.screen(Collection::Leaderboard));
        assert!(text.starts_with("Top 1 Competitors\n\n"));
        assert!(text.contains("🥇 1"));
        assert!(text.contains("alice"));
        assert!(text.contains("No Team"));
    }

    #[test]
    fn test_pad_center() {
        assert_eq!(pad("ab", 6, Align::Center), "  ab  ");
        assert_eq!(pad("abc", 6, Align::Center), " abc  ");
        assert_eq!(pad("abc", 2, Align::Left), "abc");
    }
}
