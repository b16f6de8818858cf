use crate::entities::Part;
use ordered_float::OrderedFloat;
use std::iter;

/// The best-fitting closure for a leftover gap: a single part from the first
/// candidate list, or a part from each list whose widths combine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GapFill<'a> {
    Single(&'a Part),
    Pair(&'a Part, &'a Part),
}

impl GapFill<'_> {
    pub fn width(&self) -> f64 {
        match self {
            GapFill::Single(part) => part.width,
            GapFill::Pair(a, b) => a.width + b.width,
        }
    }
}

/// Selects the part (or pair) whose width comes closest to
/// `distance - outline_margin` without exceeding it. Ties go to the earliest
/// candidate in catalog order, `None` when nothing fits.
pub fn select<'a>(
    first: &[&'a Part],
    second: &[&'a Part],
    distance: f64,
    outline_margin: f64,
) -> Option<GapFill<'a>> {
    let target = distance - outline_margin;
    first
        .iter()
        .flat_map(|&a| {
            iter::once(GapFill::Single(a)).chain(second.iter().map(move |&b| GapFill::Pair(a, b)))
        })
        .filter(|candidate| candidate.width() <= target)
        .min_by_key(|candidate| OrderedFloat(target - candidate.width()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PartRole;
    use crate::geometry::primitives::Point;
    use itertools::Itertools;

    fn part(reference: &str, width: f64) -> Part {
        Part::new(
            reference.to_uppercase(),
            reference.to_string(),
            (width, 5.0),
            PartRole::Lp,
            50,
            Point(0.0, 0.0),
            0.0,
        )
        .unwrap()
    }

    fn refs(parts: &[Part]) -> Vec<&Part> {
        parts.iter().collect_vec()
    }

    #[test]
    fn never_exceeds_the_margin_adjusted_target() {
        let first = [part("a", 30.0), part("b", 12.0), part("c", 25.0)];
        let second = [part("x", 10.0), part("y", 3.0)];
        for distance in [10.0, 20.0, 33.0, 60.0] {
            if let Some(fill) = select(&refs(&first), &refs(&second), distance, 4.0) {
                assert!(fill.width() <= distance - 4.0);
            }
        }
    }

    #[test]
    fn any_fitting_single_guarantees_a_result() {
        let first = [part("a", 30.0), part("b", 12.0)];
        let fill = select(&refs(&first), &[], 20.0, 4.0);
        //b fits alone, so a result is mandatory
        assert_eq!(fill.map(|f| f.width()), Some(12.0));
    }

    #[test]
    fn a_closer_pair_beats_a_single() {
        let first = [part("a", 12.0)];
        let second = [part("x", 10.0)];
        //target 25: the pair reaches 22, the single only 12
        let fill = select(&refs(&first), &refs(&second), 25.0, 0.0).unwrap();
        assert_eq!(fill, GapFill::Pair(&first[0], &second[0]));
        assert_eq!(fill.width(), 22.0);
    }

    #[test]
    fn ties_go_to_the_earliest_candidate() {
        let first = [part("a", 20.0), part("b", 20.0)];
        let fill = select(&refs(&first), &[], 25.0, 0.0).unwrap();
        assert_eq!(fill, GapFill::Single(&first[0]));
    }

    #[test]
    fn no_fit_returns_none() {
        let first = [part("a", 30.0)];
        let second = [part("x", 25.0)];
        assert_eq!(select(&refs(&first), &refs(&second), 20.0, 0.0), None);
        //a negative target can never be met
        assert_eq!(select(&refs(&first), &refs(&second), 3.0, 10.0), None);
    }

    #[test]
    fn empty_candidate_lists_yield_none() {
        assert_eq!(select(&[], &[], 100.0, 0.0), None);
    }
}
