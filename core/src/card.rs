use crate::state::SortMode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardData {
    pub name: String,
    pub minutes: u64,
}

impl CardData {
    pub fn new(name: impl Into<String>, minutes: u64) -> Self {
        Self {
            name: name.into(),
            minutes,
        }
    }

    pub fn from_attributes(name: Option<&str>, minutes: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_string(),
            minutes: parse_minutes(minutes),
        }
    }
}

// anything unparsable counts as zero minutes
pub fn parse_minutes(value: Option<&str>) -> u64 {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn sort_order(cards: &[CardData], mode: SortMode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    match mode {
        SortMode::Name => {
            let keys: Vec<String> = cards.iter().map(|card| card.name.to_lowercase()).collect();
            order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        }
        SortMode::Minutes => {
            order.sort_by(|&a, &b| cards[b].minutes.cmp(&cards[a].minutes));
        }
    }
    order
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// expects a query already passed through normalize_query
pub fn matches_query(name: &str, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_coerce_to_zero() {
        assert_eq!(parse_minutes(None), 0);
        assert_eq!(parse_minutes(Some("")), 0);
        assert_eq!(parse_minutes(Some("abc")), 0);
        assert_eq!(parse_minutes(Some("-4")), 0);
        assert_eq!(parse_minutes(Some("12.5")), 0);
        assert_eq!(parse_minutes(Some(" 137 ")), 137);
    }

    #[test]
    fn name_order_is_case_insensitive_ascending() {
        let cards = vec![
            CardData::new("zelda", 10),
            CardData::new("Alan", 50),
            CardData::new("Mario", 30),
        ];
        assert_eq!(sort_order(&cards, SortMode::Name), vec![1, 2, 0]);
    }

    #[test]
    fn missing_names_sort_first() {
        let cards = vec![CardData::new("Alan", 0), CardData::new("", 0)];
        assert_eq!(sort_order(&cards, SortMode::Name), vec![1, 0]);
    }

    #[test]
    fn minutes_order_is_descending() {
        let cards = vec![
            CardData::new("Alan", 10),
            CardData::new("Zelda", 50),
            CardData::new("Mario", 30),
        ];
        assert_eq!(sort_order(&cards, SortMode::Minutes), vec![1, 2, 0]);
    }

    #[test]
    fn minute_ties_keep_prior_order() {
        let cards = vec![
            CardData::new("c", 20),
            CardData::new("a", 20),
            CardData::new("b", 20),
        ];
        assert_eq!(sort_order(&cards, SortMode::Minutes), vec![0, 1, 2]);
    }

    #[test]
    fn filter_is_trimmed_lowercased_substring() {
        let normalized = normalize_query("  ZeL ");
        assert_eq!(normalized, "zel");
        assert!(matches_query("Zelda", &normalized));
        assert!(matches_query("zelzone", &normalized));
        assert!(!matches_query("Alan", &normalized));
    }

    #[test]
    fn empty_query_matches_everything() {
        let normalized = normalize_query("   ");
        assert!(normalized.is_empty());
        assert!(matches_query("anything", &normalized));
        assert!(matches_query("", &normalized));
    }

    #[test]
    fn attribute_coercions_apply() {
        let card = CardData::from_attributes(None, Some("nope"));
        assert_eq!(card.name, "");
        assert_eq!(card.minutes, 0);
        let card = CardData::from_attributes(Some("Portal"), Some("90"));
        assert_eq!(card.name, "Portal");
        assert_eq!(card.minutes, 90);
    }
}
