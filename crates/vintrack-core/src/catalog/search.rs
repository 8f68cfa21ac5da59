//! Search and toggle helpers shared by every view.

/// Case-insensitive substring match. The empty query matches everything.
pub fn matches_query(field: &str, query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty() || field.to_lowercase().contains(&query)
}

/// Items whose `field` matches `query`, in their original order.
pub fn search<'a, T, F>(items: &'a [T], query: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .filter(|item| matches_query(field(item), query))
        .collect()
}

/// Flip a boolean field on the first item matching `is_target`.
///
/// Returns `false` when nothing matched (a no-op).
pub fn toggle_flag<T, P, A>(items: &mut [T], is_target: P, flag: A) -> bool
where
    P: Fn(&T) -> bool,
    A: Fn(&mut T) -> &mut bool,
{
    match items.iter_mut().find(|item| is_target(item)) {
        Some(item) => {
            let value = flag(item);
            *value = !*value;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        on: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Manteau Carhartt", on: true },
            Row { id: 2, name: "Veste Ralph Lauren", on: false },
            Row { id: 3, name: "Abrigo carhartt negro", on: true },
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let rows = rows();
        assert_eq!(search(&rows, "", |r| r.name).len(), 3);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let rows = rows();
        let hits: Vec<u32> = search(&rows, "CARHARTT", |r| r.name)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(hits, vec![1, 3]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = rows();
        assert!(search(&rows, "stone island", |r| r.name).is_empty());
    }

    #[test]
    fn test_accented_match() {
        assert!(matches_query("Casaco Impermeável", "IMPERMEÁVEL"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut rows = rows();
        let original = rows.clone();
        assert!(toggle_flag(&mut rows, |r| r.id == 2, |r| &mut r.on));
        assert!(rows[1].on);
        assert!(toggle_flag(&mut rows, |r| r.id == 2, |r| &mut r.on));
        assert_eq!(rows, original);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut rows = rows();
        let original = rows.clone();
        assert!(!toggle_flag(&mut rows, |r| r.id == 42, |r| &mut r.on));
        assert_eq!(rows, original);
    }
}
