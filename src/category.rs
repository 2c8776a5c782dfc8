use serde::{Deserialize, Serialize};

/// Catégorie d'un lieu ou d'un service, pour la règle d'exclusion croisée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dormitory,
    SituationRoom,
    Library,
}

impl Category {
    const KEYWORDS: [(&'static str, Category); 3] = [
        ("생활관", Category::Dormitory),
        ("상황실", Category::SituationRoom),
        ("도서관", Category::Library),
    ];

    fn bit(self) -> u8 {
        match self {
            Category::Dormitory => 1,
            Category::SituationRoom => 1 << 1,
            Category::Library => 1 << 2,
        }
    }

    /// Toutes les catégories dont le mot-clé apparaît dans `name`.
    pub fn classify(name: &str) -> Categories {
        Self::KEYWORDS
            .iter()
            .filter(|(kw, _)| name.contains(kw))
            .fold(Categories::default(), |set, (_, cat)| set.with(*cat))
    }
}

/// Ensemble de catégories ; vide pour un nom sans mot-clé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Categories(u8);

impl Categories {
    pub fn with(self, category: Category) -> Self {
        Self(self.0 | category.bit())
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Un service de ces catégories ne peut pas tenir un lieu qui en partage une.
    pub fn clashes_with(self, location: Categories) -> bool {
        self.0 & location.0 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_keyword() {
        assert_eq!(
            Category::classify("생활관2"),
            Categories::default().with(Category::Dormitory)
        );
        assert!(Category::classify("중앙상황실").contains(Category::SituationRoom));
        assert!(Category::classify("도서관1").contains(Category::Library));
        assert!(Category::classify("행정팀").is_empty());
    }

    #[test]
    fn two_keywords_give_two_categories() {
        let dept = Category::classify("생활관·도서관");
        assert!(dept.contains(Category::Dormitory));
        assert!(dept.contains(Category::Library));
        assert!(!dept.contains(Category::SituationRoom));
        assert!(dept.clashes_with(Category::classify("도서관1")));
        assert!(dept.clashes_with(Category::classify("생활관3")));
        assert!(!dept.clashes_with(Category::classify("상황실1")));
    }

    #[test]
    fn empty_set_never_clashes() {
        let none = Category::classify("행정");
        assert!(!none.clashes_with(none));
        assert!(!none.clashes_with(Category::classify("생활관1")));
    }
}
