use crate::entities::SlabLayout;
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtEndLpRow, ExtSlabLayout};

/// Exports a computed layout out of the library.
pub fn export(layout: &SlabLayout) -> ExtSlabLayout {
    ExtSlabLayout {
        cast: layout.cast.as_deref().map(pairs),
        ld: pairs(&layout.ld),
        lds: layout.lds.as_deref().map(pairs),
        start_lp: layout.start_lp.as_deref().map(pairs),
        lp: pairs(&layout.lp),
        head: pairs(&layout.head),
        end_lp: layout.end_lp.as_ref().map(|rows| {
            rows.iter()
                .map(|(&row, r)| ExtEndLpRow {
                    row,
                    origin: r.origin.into(),
                    span: r.span.map(|(a, b)| (a.into(), b.into())),
                })
                .collect()
        }),
        total_points: layout.total_points(),
    }
}

fn pairs(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|&p| p.into()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EndLpRow;
    use std::collections::BTreeMap;

    #[test]
    fn export_flattens_points_and_keeps_row_order() {
        let mut rows = BTreeMap::new();
        rows.insert(
            2,
            EndLpRow {
                origin: Point(0.0, 34.0),
                span: None,
            },
        );
        rows.insert(
            0,
            EndLpRow {
                origin: Point(0.0, 0.0),
                span: Some((Point(6.0, 0.0), Point(90.0, 0.0))),
            },
        );
        let layout = SlabLayout {
            ld: vec![Point(1.0, 2.0)],
            lp: vec![Point(3.0, 4.0), Point(5.0, 6.0)],
            end_lp: Some(rows),
            ..SlabLayout::default()
        };

        let ext = export(&layout);
        assert_eq!(ext.ld, vec![(1.0, 2.0)]);
        assert_eq!(ext.lp, vec![(3.0, 4.0), (5.0, 6.0)]);
        assert!(ext.cast.is_none());

        let end_lp = ext.end_lp.unwrap();
        assert_eq!(end_lp[0].row, 0);
        assert_eq!(end_lp[0].span, Some(((6.0, 0.0), (90.0, 0.0))));
        assert_eq!(end_lp[1].row, 2);
        assert!(end_lp[1].span.is_none());
        assert_eq!(ext.total_points, 1 + 2 + 2);
    }
}
