use crate::model::Workload;
use rand::seq::SliceRandom;
use rand::Rng;

/// Mélange uniforme puis tri stable par charge croissante : les moins chargés
/// passent d'abord, les égalités sont départagées au hasard.
/// Renvoie au plus `needed` noms.
pub fn select_balanced<'a, R: Rng + ?Sized>(
    mut candidates: Vec<&'a str>,
    needed: usize,
    workload: &Workload,
    rng: &mut R,
) -> Vec<&'a str> {
    candidates.shuffle(rng);
    candidates.sort_by_key(|name| workload.get(name));
    candidates.truncate(needed);
    candidates
}
