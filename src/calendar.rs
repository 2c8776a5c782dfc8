use chrono::{Datelike, NaiveDate, Weekday};

/// Jours ouvrés de `start` à `end` inclus : lundi–vendredi hors jours fériés.
/// Plage vide si `start > end`.
pub fn working_days(start: NaiveDate, end: NaiveDate, holidays: &[NaiveDate]) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_working_day(*d, holidays))
        .collect()
}

pub fn is_working_day(date: NaiveDate, holidays: &[NaiveDate]) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Libellé coréen court du jour de la semaine.
pub fn korean_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}
