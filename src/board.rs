use crate::calendar::korean_weekday;
use crate::config::RosterConfig;
use crate::model::{AssignmentRecord, Schedule};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Vue croisée du planning : une ligne par (campus, lieu), une colonne par date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<BoardRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub campus: String,
    pub location: String,
    /// Noms par date, alignés sur `Board::dates`.
    pub cells: Vec<Vec<String>>,
}

impl Board {
    /// Lignes dans l'ordre de configuration, puis les couples non configurés
    /// (lieux fixes « 미지정 », campus « 모두 ») dans l'ordre d'apparition.
    pub fn build(config: &RosterConfig, schedule: &Schedule) -> Self {
        let dates: Vec<NaiveDate> = schedule
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut keys: Vec<(String, String)> = config
            .slots()
            .map(|(c, l, _)| (c.to_owned(), l.to_owned()))
            .collect();
        for r in schedule {
            if !keys.iter().any(|(c, l)| *c == r.campus && *l == r.location) {
                keys.push((r.campus.clone(), r.location.clone()));
            }
        }

        let rows = keys
            .into_iter()
            .map(|(campus, location)| {
                let cells = dates
                    .iter()
                    .map(|d| {
                        schedule
                            .iter()
                            .filter(|r| r.matches_slot(*d, &campus, &location))
                            .map(|r| r.staff_name.clone())
                            .collect()
                    })
                    .collect();
                BoardRow {
                    campus,
                    location,
                    cells,
                }
            })
            .collect();

        Self { dates, rows }
    }
}

/// Permet de changer le rendu du tableau (texte, HTML, etc.).
pub trait BoardRenderer {
    fn render(&self, board: &Board) -> String;
}

/// Tableau texte à barres verticales, une cellule vide vaut « - ».
#[derive(Debug, Default, Clone, Copy)]
pub struct TextBoard;

impl BoardRenderer for TextBoard {
    fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        let mut header = vec!["캠퍼스".to_owned(), "근무지".to_owned()];
        header.extend(
            board
                .dates
                .iter()
                .map(|d| format!("{}({})", d.format("%Y-%m-%d"), korean_weekday(*d))),
        );
        push_line(&mut out, &header);
        push_line(&mut out, &vec!["---".to_owned(); header.len()]);

        for row in &board.rows {
            let mut line = vec![row.campus.clone(), row.location.clone()];
            line.extend(row.cells.iter().map(|names| {
                if names.is_empty() {
                    "-".to_owned()
                } else {
                    names.join(", ")
                }
            }));
            push_line(&mut out, &line);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

/// Affectations dont le nom contient `query`, avec leur position dans le planning.
pub fn find_by_name<'a>(schedule: &'a Schedule, query: &str) -> Vec<(usize, &'a AssignmentRecord)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    schedule
        .iter()
        .enumerate()
        .filter(|(_, r)| r.staff_name.contains(query))
        .collect()
}
