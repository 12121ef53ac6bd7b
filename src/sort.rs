use crate::types::Hero;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Descending => "v",
            SortDirection::Ascending => "^",
        }
    }
}

fn by_win_rate(direction: SortDirection) -> impl Fn(&Hero, &Hero) -> Ordering {
    move |a, b| match direction {
        SortDirection::Descending => b.win_rate.total_cmp(&a.win_rate),
        SortDirection::Ascending => a.win_rate.total_cmp(&b.win_rate),
    }
}

/// Stable sort on win rate; equal rates keep their current relative order.
pub fn sort_heroes(heroes: &mut [Hero], direction: SortDirection) {
    heroes.sort_by(by_win_rate(direction));
}

/// Flip `direction` and return a fully re-sorted copy of `heroes`.
pub fn toggle_sort(heroes: &[Hero], direction: SortDirection) -> (Vec<Hero>, SortDirection) {
    let next = direction.toggled();
    let mut sorted = heroes.to_vec();
    sort_heroes(&mut sorted, next);
    (sorted, next)
}

#[cfg(test)]
pub(crate) fn hero(id: u64, name: &str, win_rate: f64) -> Hero {
    use crate::types::HeroId;
    Hero {
        hero_id: HeroId::Num(id),
        name: name.to_string(),
        icon: format!("https://img.example/{id}.png"),
        win_rate,
        countered_by: vec![],
        synergy: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(heroes: &[Hero]) -> Vec<&str> {
        heroes.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn toggle_from_default_goes_ascending() {
        let heroes = vec![hero(1, "A", 60.0), hero(2, "B", 40.0)];
        let (sorted, dir) = toggle_sort(&heroes, SortDirection::Descending);
        assert_eq!(dir, SortDirection::Ascending);
        assert_eq!(names(&sorted), ["B", "A"]);
    }

    #[test]
    fn double_toggle_restores_order() {
        let mut heroes = vec![
            hero(1, "A", 48.5),
            hero(2, "B", 55.1),
            hero(3, "C", 50.0),
            hero(4, "D", 12.3),
        ];
        sort_heroes(&mut heroes, SortDirection::Descending);
        let (once, dir) = toggle_sort(&heroes, SortDirection::Descending);
        let (twice, dir) = toggle_sort(&once, dir);
        assert_eq!(dir, SortDirection::Descending);
        assert_eq!(twice, heroes);
    }

    #[test]
    fn ties_keep_prior_order() {
        let mut heroes = vec![hero(1, "A", 50.0), hero(2, "B", 50.0), hero(3, "C", 70.0)];
        sort_heroes(&mut heroes, SortDirection::Descending);
        assert_eq!(names(&heroes), ["C", "A", "B"]);
        sort_heroes(&mut heroes, SortDirection::Ascending);
        assert_eq!(names(&heroes), ["A", "B", "C"]);
    }
}
