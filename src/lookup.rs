use crate::types::Hero;
use regex::Regex;

/// Find a hero by id or by name, ignoring case.
pub fn find_hero<'a>(heroes: &'a [Hero], query: &str) -> Option<&'a Hero> {
    let query = query.trim();
    heroes
        .iter()
        .find(|h| h.hero_id.to_string() == query)
        .or_else(|| heroes.iter().find(|h| h.name.eq_ignore_ascii_case(query)))
}

/// Pair each hero with its 1-based rank, keeping those whose name matches
/// `re`. Ranks refer to the full list, not the filtered one.
pub fn ranked_matching<'a>(heroes: &'a [Hero], re: Option<&Regex>) -> Vec<(usize, &'a Hero)> {
    heroes
        .iter()
        .enumerate()
        .map(|(i, h)| (i + 1, h))
        .filter(|(_, h)| re.map_or(true, |re| re.is_match(&h.name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::hero;

    #[test]
    fn finds_by_id_then_name() {
        let heroes = vec![hero(1, "Miya", 50.0), hero(2, "Layla", 52.0)];
        assert_eq!(find_hero(&heroes, "2").unwrap().name, "Layla");
        assert_eq!(find_hero(&heroes, " miya ").unwrap().name, "Miya");
        assert!(find_hero(&heroes, "Zilong").is_none());
    }

    #[test]
    fn filter_keeps_full_list_ranks() {
        let heroes = vec![
            hero(1, "Lancelot", 55.0),
            hero(2, "Miya", 50.0),
            hero(3, "Lapu-Lapu", 49.0),
        ];
        let re = Regex::new("(?i)^la").unwrap();
        let ranked: Vec<_> = ranked_matching(&heroes, Some(&re))
            .into_iter()
            .map(|(rank, h)| (rank, h.name.as_str()))
            .collect();
        assert_eq!(ranked, [(1, "Lancelot"), (3, "Lapu-Lapu")]);
        assert_eq!(ranked_matching(&heroes, None).len(), 3);
    }
}
