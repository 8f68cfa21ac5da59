//! Saved search filters ("snipers") and the add/edit draft.

use tracing::{debug, info};

use super::search::{search, toggle_flag};

/// Category choices offered by the filter editor
pub const CATEGORY_OPTIONS: [&str; 6] = [
    "Blouses Femmes",
    "Chemises Femmes",
    "Hauts et t-shirts",
    "Sweats et sweats à capuche",
    "Sacs",
    "Bottes",
];

#[derive(Debug, Clone, PartialEq)]
pub struct FilterItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sizes: String,
    pub colors: String,
    /// Sniper running for this filter
    pub active: bool,
    /// Push a notification on each match
    pub notified: bool,
    pub mask_reposts: bool,
    pub price_label: String,
}

fn filter(
    id: u32,
    name: &str,
    categories: &[&str],
    brands: &[&str],
    notified: bool,
    price_label: &str,
) -> FilterItem {
    FilterItem {
        id,
        name: name.to_string(),
        description: "Cliquer pour désactiver".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        brands: brands.iter().map(|b| b.to_string()).collect(),
        sizes: String::new(),
        colors: String::new(),
        active: true,
        notified,
        mask_reposts: false,
        price_label: price_label.to_string(),
    }
}

/// The user's filter list
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBook {
    filters: Vec<FilterItem>,
}

impl Default for FilterBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBook {
    /// Book seeded with the account's saved filters
    pub fn new() -> Self {
        Self::from_filters(vec![
            filter(1, "ganni femme", &["Blouses", "+7"], &["Ganni"], true, "< 20 €"),
            filter(2, "tee shirt golden goose", &["Hauts et t-shirts", "+1"], &["Golden Goose"], false, "< 20 €"),
            filter(3, "surprise", &["Sweats et sweats à capuche"], &["Surprise"], true, "< 30 €"),
            filter(4, "sac coach femme", &["Sacs"], &["Coach"], true, "< 35 €"),
            filter(5, "chaussure isabel marant", &["Bottes", "+2"], &["Isabel Marant Étoile", "+1"], true, "< 100 €"),
        ])
    }

    pub fn from_filters(filters: Vec<FilterItem>) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &[FilterItem] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&FilterItem> {
        self.filters.iter().find(|f| f.id == id)
    }

    /// Filters whose name contains `query`
    pub fn search(&self, query: &str) -> Vec<&FilterItem> {
        search(&self.filters, query, |f| f.name.as_str())
    }

    pub fn toggle_active(&mut self, id: u32) -> bool {
        toggle_flag(&mut self.filters, |f| f.id == id, |f| &mut f.active)
    }

    pub fn toggle_notified(&mut self, id: u32) -> bool {
        toggle_flag(&mut self.filters, |f| f.id == id, |f| &mut f.notified)
    }

    /// Remove a filter. Unknown ids are a no-op.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| f.id != id);
        let removed = self.filters.len() != before;
        if removed {
            debug!(id, "Filter deleted");
        }
        removed
    }

    fn next_id(&self) -> u32 {
        self.filters.iter().map(|f| f.id).max().unwrap_or(0) + 1
    }

    /// Store a draft: id 0 inserts a new filter, any other id replaces the
    /// filter with that id. A blank name is rejected.
    ///
    /// Returns the id of the stored filter.
    pub fn save(&mut self, draft: FilterDraft) -> Option<u32> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            debug!("Ignoring filter draft without a name");
            return None;
        }

        if draft.id == 0 {
            let id = self.next_id();
            info!(id, name = %name, "Filter added");
            self.filters.push(draft.into_filter(id, name, None));
            return Some(id);
        }

        let slot = self.filters.iter_mut().find(|f| f.id == draft.id)?;
        let id = draft.id;
        let updated = draft.into_filter(id, name, Some(&*slot));
        info!(id, name = %updated.name, "Filter updated");
        *slot = updated;
        Some(id)
    }
}

/// Editable copy of a filter, as held by the add/edit modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDraft {
    /// 0 for a new filter
    pub id: u32,
    pub name: String,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sizes: String,
    pub colors: String,
    pub mask_reposts: bool,
    pub notified: bool,
    pub active: bool,
}

impl FilterDraft {
    /// Empty draft for the "add" modal
    pub fn blank() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_filter(filter: &FilterItem) -> Self {
        Self {
            id: filter.id,
            name: filter.name.clone(),
            categories: filter.categories.clone(),
            brands: filter.brands.clone(),
            sizes: filter.sizes.clone(),
            colors: filter.colors.clone(),
            mask_reposts: filter.mask_reposts,
            notified: filter.notified,
            active: filter.active,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Modal title
    pub fn title(&self) -> &'static str {
        if self.is_new() {
            "Ajouter un filtre"
        } else {
            "Modifier un filtre"
        }
    }

    pub fn add_category(&mut self, category: &str) -> bool {
        push_unique(&mut self.categories, category)
    }

    pub fn remove_category(&mut self, category: &str) {
        self.categories.retain(|c| c != category);
    }

    pub fn add_brand(&mut self, brand: &str) -> bool {
        push_unique(&mut self.brands, brand)
    }

    pub fn remove_brand(&mut self, brand: &str) {
        self.brands.retain(|b| b != brand);
    }

    fn into_filter(self, id: u32, name: String, previous: Option<&FilterItem>) -> FilterItem {
        FilterItem {
            id,
            name,
            description: previous
                .map(|p| p.description.clone())
                .unwrap_or_else(|| "Cliquer pour désactiver".to_string()),
            categories: self.categories,
            brands: self.brands,
            sizes: self.sizes,
            colors: self.colors,
            active: self.active,
            notified: self.notified,
            mask_reposts: self.mask_reposts,
            price_label: previous.map(|p| p.price_label.clone()).unwrap_or_default(),
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_book() {
        let book = FilterBook::new();
        assert_eq!(book.len(), 5);
        assert!(book.filters().iter().all(|f| f.active));
        assert!(!book.get(2).unwrap().notified);
    }

    #[test]
    fn test_search_by_name() {
        let book = FilterBook::new();
        let hits: Vec<u32> = book.search("FEMME").iter().map(|f| f.id).collect();
        assert_eq!(hits, vec![1, 4]);
        assert_eq!(book.search("").len(), 5);
        assert!(book.search("prada").is_empty());
    }

    #[test]
    fn test_toggles() {
        let mut book = FilterBook::new();
        assert!(book.toggle_active(3));
        assert!(!book.get(3).unwrap().active);
        assert!(book.toggle_notified(2));
        assert!(book.get(2).unwrap().notified);
        assert!(!book.toggle_active(42));
    }

    #[test]
    fn test_delete() {
        let mut book = FilterBook::new();
        assert!(book.delete(1));
        assert!(!book.delete(1));
        assert_eq!(book.len(), 4);
        assert!(book.get(1).is_none());
    }

    #[test]
    fn test_save_new_takes_next_id() {
        let mut book = FilterBook::new();
        book.delete(3);
        let mut draft = FilterDraft::blank();
        draft.name = "  nike tn  ".to_string();
        draft.add_brand("Nike");
        assert_eq!(book.save(draft), Some(6));
        let saved = book.get(6).unwrap();
        assert_eq!(saved.name, "nike tn");
        assert_eq!(saved.brands, vec!["Nike".to_string()]);
        assert!(saved.active);
    }

    #[test]
    fn test_save_into_empty_book() {
        let mut book = FilterBook::from_filters(Vec::new());
        let mut draft = FilterDraft::blank();
        draft.name = "first".to_string();
        assert_eq!(book.save(draft), Some(1));
    }

    #[test]
    fn test_save_edit_replaces_in_place() {
        let mut book = FilterBook::new();
        let mut draft = FilterDraft::from_filter(book.get(4).unwrap());
        assert_eq!(draft.title(), "Modifier un filtre");
        draft.name = "sac coach".to_string();
        draft.notified = false;
        assert_eq!(book.save(draft), Some(4));

        assert_eq!(book.len(), 5);
        let edited = book.get(4).unwrap();
        assert_eq!(edited.name, "sac coach");
        assert!(!edited.notified);
        assert_eq!(edited.price_label, "< 35 €");
        assert_eq!(book.filters()[3].id, 4);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut book = FilterBook::new();
        let before = book.clone();
        let mut draft = FilterDraft::blank();
        draft.name = "   ".to_string();
        assert_eq!(book.save(draft), None);
        assert_eq!(book, before);
    }

    #[test]
    fn test_save_unknown_id_is_noop() {
        let mut book = FilterBook::new();
        let before = book.clone();
        let draft = FilterDraft {
            id: 77,
            name: "ghost".to_string(),
            ..FilterDraft::blank()
        };
        assert_eq!(book.save(draft), None);
        assert_eq!(book, before);
    }

    #[test]
    fn test_draft_dedupes_values() {
        let mut draft = FilterDraft::blank();
        assert_eq!(draft.title(), "Ajouter un filtre");
        assert!(draft.add_category(CATEGORY_OPTIONS[4]));
        assert!(!draft.add_category("Sacs"));
        assert!(!draft.add_brand(" "));
        assert!(draft.add_brand(" Coach "));
        assert!(!draft.add_brand("Coach"));
        draft.remove_category("Sacs");
        draft.remove_brand("Coach");
        assert!(draft.categories.is_empty());
        assert!(draft.brands.is_empty());
    }
}
