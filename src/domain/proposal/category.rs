//! Fixed catalog of trade categories a proposal can be filed under.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Trade categories offered in the creation form, in display order.
pub const CATEGORIES: &[&str] = &[
    "Målning Invändigt & Tapeter",
    "Elektriker",
    "Renovering",
    "Badrumsrenovering",
    "Rörmokare",
    "Golvslipning, Olja & Lack",
    "Avfuktning",
    "Balkong",
    "Bergvärmepumpar",
    "Betongarbete",
    "Bredbandsinstallation",
    "Brygga",
    "Bygga altan & uterum",
    "Dörrar",
    "Fasadarbeten",
    "Fasadmålare",
    "Fönster",
    "Garage & Carport",
    "Glasmästare",
    "Golvläggning",
    "Golvvärme",
    "Håltagning",
    "Isolering",
    "Kakelsättare",
    "Kamin & Skorsten",
    "Köksrenovering",
    "Luftvärmepumpar",
    "Låssmed",
    "Maskinuthyrning",
    "Mattläggning",
    "Murare",
    "Möbelmontering",
    "Möbelsnickare",
    "Nybyggnation",
    "Om- & Tillbyggnation",
    "Persienn, Markis & Solfilm",
    "Plåtslagare",
    "Relining",
    "Rivning",
    "Sanerare",
    "Slamsugning & Stamspolning",
    "Solceller",
    "Stambyte",
    "Ställningsbyggare & uthyrning",
    "Svets & Smide",
    "Tak- & Fasadrengöring",
    "Takläggare",
    "Takmålare",
    "Trappor",
    "Undertak & Akustik",
    "Ventilationsfirmor",
    "Vindsrenovering",
    "Värme- och kylsystem",
];

static CATEGORY_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| CATEGORIES.iter().copied().collect());

/// Returns true if `category` is one of the catalog entries (exact match).
pub fn is_known_category(category: &str) -> bool {
    CATEGORY_SET.contains(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_53_unique_entries() {
        assert_eq!(CATEGORIES.len(), 53);
        assert_eq!(CATEGORY_SET.len(), CATEGORIES.len());
    }

    #[test]
    fn known_categories_are_recognized() {
        assert!(is_known_category("Elektriker"));
        assert!(is_known_category("Rörmokare"));
        assert!(is_known_category("Golvslipning, Olja & Lack"));
        assert!(is_known_category("Värme- och kylsystem"));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(!is_known_category("elektriker"));
        assert!(!is_known_category(" Elektriker"));
        assert!(!is_known_category(""));
    }
}
