//! Data Table Component
//!
//! Renders a [`Table`] projection as a Bootstrap card with a striped table.

use leptos::*;

use octofit_core::{Align, Cell, CellStyle, Collection, Column, Table, Tone};

/// Bootstrap contextual name of a tone
pub fn tone_name(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "primary",
        Tone::Secondary => "secondary",
        Tone::Success => "success",
        Tone::Danger => "danger",
        Tone::Warning => "warning",
        Tone::Info => "info",
        Tone::Light => "light",
    }
}

/// Badge classes; light backgrounds need dark text
pub fn badge_class(tone: Tone) -> String {
    match tone {
        Tone::Warning | Tone::Info | Tone::Light => {
            format!("badge bg-{} text-dark", tone_name(tone))
        }
        _ => format!("badge bg-{}", tone_name(tone)),
    }
}

fn column_style(column: &Column) -> String {
    match column.align {
        Align::Left => format!("width: {}%", column.width),
        Align::Center => format!("width: {}%; text-align: center", column.width),
    }
}

fn cell_view(cell: Cell, column: &Column) -> View {
    let align = match column.align {
        Align::Left => "",
        Align::Center => "text-align: center",
    };
    let Cell { text, style } = cell;

    match style {
        CellStyle::Plain => view! { <td style=align>{text}</td> }.into_view(),
        CellStyle::Strong => view! { <td style=align><strong>{text}</strong></td> }.into_view(),
        CellStyle::Muted => view! { <td class="text-muted" style=align>{text}</td> }.into_view(),
        CellStyle::Score => view! {
            <td style=align><strong class="text-success">{text}</strong></td>
        }
        .into_view(),
        CellStyle::Badge(tone) => view! {
            <td style=align><span class=badge_class(tone)>{text}</span></td>
        }
        .into_view(),
        CellStyle::Rank(tone) => view! {
            <td style=align><span class=format!("{} fs-5", badge_class(tone))>{text}</span></td>
        }
        .into_view(),
        CellStyle::Mailto => {
            let href = format!("mailto:{}", text);
            view! {
                <td style=align><a href=href class="text-decoration-none">{text}</a></td>
            }
            .into_view()
        }
    }
}

/// Card with a count heading and one table row per item
#[component]
pub fn DataTable(#[prop(into)] heading: String, table: Table) -> impl IntoView {
    let Table { collection, columns, rows } = table;
    let table_class = if collection == Collection::Leaderboard {
        "table table-hover mb-0"
    } else {
        "table table-hover table-striped mb-0"
    };

    view! {
        <div class="card shadow-sm">
            <div class="card-header bg-gradient border-0">
                <h5 class="card-title mb-0">{heading}</h5>
            </div>
            <div class="card-body p-0">
                <div class="table-responsive">
                    <table class=table_class>
                        <thead>
                            <tr class="table-dark">
                                {columns
                                    .iter()
                                    .map(|column| view! {
                                        <th scope="col" style=column_style(column)>{column.title}</th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let class = if row.highlighted { "table-light" } else { "" };
                                    view! {
                                        <tr class=class>
                                            {row.cells
                                                .into_iter()
                                                .zip(columns.iter())
                                                .map(|(cell, column)| cell_view(cell, column))
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(badge_class(Tone::Success), "badge bg-success");
        assert_eq!(badge_class(Tone::Warning), "badge bg-warning text-dark");
        assert_eq!(badge_class(Tone::Light), "badge bg-light text-dark");
    }

    #[test]
    fn test_column_style() {
        assert_eq!(column_style(&Column::left("ID", 10)), "width: 10%");
        assert_eq!(
            column_style(&Column::center("Rank", 10)),
            "width: 10%; text-align: center"
        );
    }
}
