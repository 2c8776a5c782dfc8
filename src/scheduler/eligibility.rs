use crate::category::Category;
use crate::model::StaffMember;
use std::collections::HashSet;

/// Candidats pour un lieu : bon campus (ou « tous »), pas encore affectés ce jour,
/// et service ne partageant aucune catégorie avec le lieu.
/// L'ordre de l'effectif est conservé ; un nom n'apparaît qu'une fois.
pub fn eligible_candidates<'a>(
    staff: &'a [StaffMember],
    campus: &str,
    location: &str,
    assigned_today: &HashSet<String>,
) -> Vec<&'a str> {
    let location_cats = Category::classify(location);
    let mut seen = HashSet::new();
    staff
        .iter()
        .filter(|s| seen.insert(s.name.as_str()))
        .filter(|s| s.can_work_at(campus))
        .filter(|s| !assigned_today.contains(&s.name))
        .filter(|s| !Category::classify(&s.department).clashes_with(location_cats))
        .map(|s| s.name.as_str())
        .collect()
}
