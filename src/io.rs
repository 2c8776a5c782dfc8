use crate::model::{split_list, Schedule, Session, StaffMember, Workload};
use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use csv::{ReaderBuilder, WriterBuilder};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::fs;
use std::path::Path;

const NAME_HEADERS: [&str; 2] = ["이름", "name"];
const CAMPUS_HEADERS: [&str; 2] = ["캠퍼스", "campus"];
const DEPARTMENT_HEADERS: [&str; 2] = ["소속", "department"];
const FIXED_DATES_HEADERS: [&str; 2] = ["고정근무일자", "fixed_dates"];
const FIXED_LOCATIONS_HEADERS: [&str; 2] = ["고정근무지", "fixed_locations"];

/// Import de l'effectif, CSV ou XLSX selon l'extension.
pub fn import_staff<P: AsRef<Path>>(path: P) -> Result<Vec<StaffMember>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => import_staff_csv(path),
        "xlsx" => import_staff_xlsx(path),
        _ => bail!("unsupported roster format: {}", path.display()),
    }
}

/// Import CSV : header `이름,캠퍼스,소속[,고정근무일자][,고정근무지]` (ou noms anglais).
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> Result<Vec<StaffMember>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_owned).collect());
    }
    staff_from_rows(&headers, rows)
}

/// Import XLSX : première feuille, première ligne = en-têtes.
pub fn import_staff_xlsx<P: AsRef<Path>>(path: P) -> Result<Vec<StaffMember>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| anyhow!("opening {}: {e}", path.display()))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("workbook has no sheet")?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| anyhow!("reading sheet {sheet}: {e}"))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .context("sheet is empty")?
        .iter()
        .map(cell_text)
        .collect();
    let rows: Vec<Vec<String>> = rows.map(|row| row.iter().map(cell_text).collect()).collect();
    staff_from_rows(&headers, rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        _ => cell.to_string(),
    }
}

fn column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        names.iter().any(|n| h.eq_ignore_ascii_case(n))
    })
}

fn staff_from_rows(headers: &[String], rows: Vec<Vec<String>>) -> Result<Vec<StaffMember>> {
    let name_col = column(headers, &NAME_HEADERS).context("missing name column")?;
    let campus_col = column(headers, &CAMPUS_HEADERS).context("missing campus column")?;
    let dept_col = column(headers, &DEPARTMENT_HEADERS).context("missing department column")?;
    let dates_col = column(headers, &FIXED_DATES_HEADERS);
    let locs_col = column(headers, &FIXED_LOCATIONS_HEADERS);

    let mut out = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let get = |col: Option<usize>| col.and_then(|c| row.get(c)).map(|s| s.trim()).unwrap_or("");
        let name = get(Some(name_col));
        if name.is_empty() {
            // +2 : en-tête et numérotation à partir de 1
            bail!("row {}: empty name", idx + 2);
        }
        let mut member = StaffMember::new(name, get(Some(campus_col)), get(Some(dept_col)));
        member.fixed_dates = split_list(get(dates_col));
        member.fixed_locations = split_list(get(locs_col));
        out.push(member);
    }
    Ok(out)
}

/// Export CSV du planning : header `날짜,캠퍼스,근무지,직원,유형`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["날짜", "캠퍼스", "근무지", "직원", "유형"])?;
    for r in schedule {
        let date = r.date.format("%Y-%m-%d").to_string();
        w.write_record([
            date.as_str(),
            r.campus.as_str(),
            r.location.as_str(),
            r.staff_name.as_str(),
            r.kind.label(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des compteurs : header `직원 이름,횟수`
pub fn export_workload_csv<P: AsRef<Path>>(path: P, workload: &Workload) -> Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["직원 이름", "횟수"])?;
    for (name, count) in workload.iter() {
        w.write_record([name, count.to_string().as_str()])?;
    }
    w.flush()?;
    Ok(())
}

pub const SCHEDULE_SHEET: &str = "Schedule";
pub const WORKLOAD_SHEET: &str = "근무통계";

/// Export XLSX : feuille `Schedule` (planning) et feuille `근무통계` (compteurs).
pub fn export_workbook_xlsx<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    workload: &Workload,
) -> Result<()> {
    let path = path.as_ref();
    write_workbook(path, schedule, workload)
        .map_err(|e| anyhow!("writing workbook {}: {e}", path.display()))
}

fn write_workbook(path: &Path, schedule: &Schedule, workload: &Workload) -> Result<(), XlsxError> {
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xF2F2F2));
    let cell = Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SCHEDULE_SHEET)?;
    for (col, title) in ["날짜", "캠퍼스", "근무지", "직원", "유형"].into_iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, title, &header)?;
        sheet.set_column_width(col as u16, 14)?;
    }
    for (idx, r) in schedule.iter().enumerate() {
        let row = idx as u32 + 1;
        let date = r.date.format("%Y-%m-%d").to_string();
        let values = [
            date.as_str(),
            r.campus.as_str(),
            r.location.as_str(),
            r.staff_name.as_str(),
            r.kind.label(),
        ];
        for (col, value) in values.into_iter().enumerate() {
            sheet.write_string_with_format(row, col as u16, value, &cell)?;
        }
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(WORKLOAD_SHEET)?;
    sheet.write_string_with_format(0, 0, "직원 이름", &header)?;
    sheet.write_string_with_format(0, 1, "횟수", &header)?;
    sheet.set_column_width(0, 14)?;
    for (idx, (name, count)) in workload.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string_with_format(row, 0, name, &cell)?;
        sheet.write_number_with_format(row, 1, count, &cell)?;
    }

    workbook.save(path)
}

/// Export JSON de la session (jolie mise en forme)
pub fn export_session_json<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let s = serde_json::to_string_pretty(session)?;
    fs::write(path, s)?;
    Ok(())
}
