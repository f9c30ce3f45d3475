#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use test_case::test_case;

    use ffd::config::{CandidateStrategy, FFDConfig};
    use ffd::{io, layout};
    use marker_rs::entities::{LayoutRequest, LayoutResult, Piece};
    use marker_rs::geometry::Rotation;
    use marker_rs::geometry::geo_traits::Shape;
    use marker_rs::geometry::primitives::{Outline, Point, Rect};
    use marker_rs::io::export::{export_result, place_outline};
    use marker_rs::io::import::import_request;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn rect_piece(id: &str, w: f64, h: f64) -> Piece {
        Piece::new(id, Outline::from(Rect::try_new(0.0, 0.0, w, h).unwrap()))
    }

    fn config(strategy: CandidateStrategy) -> FFDConfig {
        FFDConfig {
            candidate_strategy: strategy,
            ..FFDConfig::default()
        }
    }

    fn read_asset(path: &str) -> LayoutRequest {
        let ext_request = io::read_request(Path::new(path)).unwrap();
        import_request(&ext_request)
    }

    /// Bounding boxes of the placed pieces in bin coordinates, in placement order
    fn placed_bboxes(request: &LayoutRequest, result: &LayoutResult) -> Vec<Rect> {
        let matched = result.matched_pieces(&request.pieces);
        assert_eq!(matched.len(), result.n_placed());
        matched
            .into_iter()
            .map(|(p, piece)| place_outline(&piece.outline, p).bbox())
            .collect_vec()
    }

    fn assert_valid(request: &LayoutRequest, result: &LayoutResult, config: &FFDConfig) {
        let bin_height = request.bin_height_or(config.default_bin_height);
        let bboxes = placed_bboxes(request, result);
        for (p, bbox) in result.placements.iter().zip(&bboxes) {
            assert!(Rotation::ALL.contains(&p.rotation));
            assert!(!p.flipped);
            // origins are rounded to whole millimeters, never across the bottom or left edge
            assert!(bbox.x_min >= -1e-6, "{} sticks out on the left: {bbox:?}", p.piece_id);
            assert!(
                bbox.x_max <= request.bin_width + 0.5,
                "{} sticks out on the right: {bbox:?}",
                p.piece_id
            );
            assert!(bbox.y_min >= -1e-6, "{} sticks out at the bottom: {bbox:?}", p.piece_id);
            assert!(bbox.y_max <= bin_height + 0.5);
        }
        for (a, b) in bboxes.iter().tuple_combinations() {
            assert!(!a.overlaps_padded(b, config.padding), "{a:?} and {b:?} overlap");
        }
        assert!(result.utilized_area >= 0.0);
        assert!(result.bin_area >= result.utilized_area);
        let expected_utilized: f64 = bboxes.iter().map(|b| b.area()).sum();
        assert!(approx_eq!(f64, result.utilized_area, expected_utilized, epsilon = 1e-6));
    }

    #[test]
    fn two_rectangles() {
        init_logger();
        let request = LayoutRequest::new(
            vec![rect_piece("a", 200.0, 100.0), rect_piece("b", 200.0, 100.0)],
            1000.0,
        );
        let result = layout(&request, &FFDConfig::default());

        assert_eq!(result.n_placed(), 2);
        assert!(approx_eq!(f64, result.utilized_area, 40000.0));
        assert_eq!(
            result.placements.iter().map(|p| (p.x, p.y)).collect_vec(),
            vec![(0.0, 0.0), (250.0, 0.0)]
        );
        assert!(approx_eq!(f64, result.bin_area, 450.0 * 100.0));
        assert!(result.is_complete(&request));
    }

    #[test_case(1000.0; "regular width")]
    #[test_case(0.0; "zero width")]
    fn empty_request(bin_width: f64) {
        init_logger();
        let request = LayoutRequest::new(vec![], bin_width);
        let result = layout(&request, &FFDConfig::default());

        assert!(result.placements.is_empty());
        assert_eq!(result.utilized_area, 0.0);
        assert_eq!(result.bin_area, 0.0);
        assert_eq!(result.efficiency, None);
        assert_eq!(result, LayoutResult::empty());
    }

    #[test_case(CandidateStrategy::ExtremePoints; "extreme points")]
    #[test_case(CandidateStrategy::Skyline; "skyline")]
    fn too_wide_in_every_rotation(strategy: CandidateStrategy) {
        init_logger();
        let request = LayoutRequest::new(vec![rect_piece("tablecloth", 1200.0, 1100.0)], 1000.0);
        let result = layout(&request, &config(strategy));

        assert_eq!(result.n_placed(), 0);
        assert_eq!(result.unplaced(&request), vec!["tablecloth"]);
        assert_eq!(result.utilized_area, 0.0);
    }

    #[test_case(0.0; "zero width")]
    #[test_case(-500.0; "negative width")]
    #[test_case(f64::NAN; "nan width")]
    fn no_room_drops_everything(bin_width: f64) {
        init_logger();
        let request = LayoutRequest::new(
            vec![rect_piece("a", 200.0, 100.0), rect_piece("b", 50.0, 10.0)],
            bin_width,
        );
        for strategy in [CandidateStrategy::ExtremePoints, CandidateStrategy::Skyline] {
            let result = layout(&request, &config(strategy));
            assert_eq!(result.n_placed(), 0);
            assert_eq!(result.unplaced(&request), vec!["a", "b"]);
        }
    }

    #[test_case(CandidateStrategy::ExtremePoints; "extreme points")]
    #[test_case(CandidateStrategy::Skyline; "skyline")]
    fn placements_follow_descending_area(strategy: CandidateStrategy) {
        init_logger();
        let request = LayoutRequest::new(
            vec![
                rect_piece("d", 100.0, 100.0),
                rect_piece("a", 400.0, 300.0),
                rect_piece("e", 50.0, 40.0),
                rect_piece("c", 250.0, 100.0),
                rect_piece("b", 300.0, 200.0),
            ],
            1000.0,
        );
        let config = config(strategy);
        let result = layout(&request, &config);

        assert_eq!(
            result.placements.iter().map(|p| p.piece_id.as_str()).collect_vec(),
            vec!["a", "b", "c", "d", "e"]
        );
        assert_valid(&request, &result, &config);

        let json = serde_json::to_string(&export_result(&result)).unwrap();
        for _ in 0..5 {
            let rerun = layout(&request, &config);
            assert_eq!(rerun, result);
            assert_eq!(serde_json::to_string(&export_result(&rerun)).unwrap(), json);
        }
    }

    #[test_case("../assets/shirt.json", CandidateStrategy::ExtremePoints; "shirt extreme points")]
    #[test_case("../assets/shirt.json", CandidateStrategy::Skyline; "shirt skyline")]
    #[test_case("../assets/trousers.json", CandidateStrategy::ExtremePoints; "trousers extreme points")]
    #[test_case("../assets/trousers.json", CandidateStrategy::Skyline; "trousers skyline")]
    fn garment_assets(path: &str, strategy: CandidateStrategy) {
        init_logger();
        let request = read_asset(path);
        let config = config(strategy);
        let result = layout(&request, &config);

        assert!(result.is_complete(&request), "unplaced: {:?}", result.unplaced(&request));
        assert_valid(&request, &result, &config);
        assert_eq!(layout(&request, &config), result);

        let efficiency = result.efficiency.unwrap();
        assert!(efficiency > 0.0 && efficiency <= 1.0);
    }

    #[test_case(&[200.0, 300.0, 100.0]; "three pieces")]
    #[test_case(&[500.0, 480.0]; "two wide pieces")]
    #[test_case(&[10.0; 12]; "many narrow pieces")]
    fn no_drop_when_room(widths: &[f64]) {
        init_logger();
        let config = FFDConfig::default();
        let pieces = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| rect_piece(&format!("piece_{i}"), w, 150.0))
            .collect_vec();
        let bin_width = widths.iter().sum::<f64>() + config.padding * widths.len() as f64;
        let request = LayoutRequest::new(pieces, bin_width);

        let result = layout(&request, &config);
        assert_eq!(result.n_placed(), request.pieces.len());
        assert_valid(&request, &result, &config);
    }

    #[test]
    fn rotation_flag() {
        init_logger();
        let mut request = LayoutRequest::new(vec![rect_piece("strap", 1200.0, 100.0)], 1000.0);
        request.allow_rotation = false;

        // inert by default: the strap only fits upright
        let result = layout(&request, &FFDConfig::default());
        let placement = result.placement("strap").unwrap();
        assert_eq!(placement.rotation, Rotation::R90);
        assert_eq!((placement.x, placement.y), (100.0, 0.0));

        let honoring = FFDConfig {
            honor_rotation_flag: true,
            ..FFDConfig::default()
        };
        assert_eq!(layout(&request, &honoring).n_placed(), 0);
    }

    #[test]
    fn mirroring_is_never_applied() {
        init_logger();
        let mut request = LayoutRequest::new(
            vec![rect_piece("a", 200.0, 100.0), rect_piece("b", 100.0, 100.0)],
            1000.0,
        );
        request.allow_mirroring = true;
        let result = layout(&request, &FFDConfig::default());
        assert_eq!(result.n_placed(), 2);
        assert!(result.placements.iter().all(|p| !p.flipped));
    }

    #[test]
    fn rotation_about_origin_moves_offset_outlines() {
        init_logger();
        // an outline authored away from the origin still lands inside the bin
        let offset = Outline::new(vec![
            Point(500.0, 500.0),
            Point(700.0, 500.0),
            Point(700.0, 600.0),
            Point(500.0, 600.0),
        ]);
        let request = LayoutRequest::new(vec![Piece::new("offset", offset)], 1000.0);
        let config = FFDConfig::default();
        let result = layout(&request, &config);

        let placement = result.placement("offset").unwrap();
        assert_eq!(placement.rotation, Rotation::R0);
        assert_eq!((placement.x, placement.y), (-500.0, -500.0));
        assert_valid(&request, &result, &config);
    }

    #[test]
    fn degenerate_outlines_are_points() {
        init_logger();
        let request = LayoutRequest::new(
            vec![
                Piece::new("empty", Outline::new(vec![])),
                Piece::new("point", Outline::new(vec![Point(0.0, 0.0)])),
                rect_piece("panel", 200.0, 100.0),
            ],
            1000.0,
        );
        let config = FFDConfig::default();
        let result = layout(&request, &config);

        assert_eq!(result.n_placed(), 3);
        assert_eq!(result.placements[0].piece_id, "panel");
        assert!(result.placements.iter().all(|p| p.y == 0.0));
        assert!(approx_eq!(f64, result.utilized_area, 20000.0));
        assert!(result.placements.iter().map(|p| p.x as i64).all_unique());
    }

    #[test_case(CandidateStrategy::ExtremePoints; "extreme points")]
    #[test_case(CandidateStrategy::Skyline; "skyline")]
    fn fractional_outline_stays_in_bin(strategy: CandidateStrategy) {
        init_logger();
        let shifted = Outline::from(Rect::try_new(0.5, 0.0, 200.5, 100.0).unwrap());
        let request = LayoutRequest::new(
            vec![Piece::new("shifted", shifted), rect_piece("b", 100.0, 100.0)],
            1000.0,
        );
        let config = config(strategy);
        let result = layout(&request, &config);

        let placement = result.placement("shifted").unwrap();
        assert_eq!(placement.rotation, Rotation::R0);
        assert_eq!((placement.x, placement.y), (0.0, 0.0));
        assert_eq!(result.n_placed(), 2);
        assert_valid(&request, &result, &config);
    }

    #[test_case(CandidateStrategy::ExtremePoints; "extreme points")]
    #[test_case(CandidateStrategy::Skyline; "skyline")]
    fn unbounded_roll_width(strategy: CandidateStrategy) {
        init_logger();
        let request = LayoutRequest::new(
            vec![rect_piece("a", 200.0, 100.0), rect_piece("b", 200.0, 100.0)],
            1e300,
        );
        let config = config(strategy);
        let result = layout(&request, &config);

        assert_eq!(result.n_placed(), 2);
        assert_eq!((result.placements[0].x, result.placements[0].y), (0.0, 0.0));
        assert_eq!(result.placements[1].y, 0.0);
        assert_valid(&request, &result, &config);
    }

    #[test]
    fn repeated_piece_ids() {
        init_logger();
        let request = LayoutRequest::new(
            vec![
                rect_piece("sleeve", 300.0, 100.0),
                rect_piece("collar", 50.0, 50.0),
                rect_piece("sleeve", 300.0, 100.0),
            ],
            1000.0,
        );
        let config = FFDConfig::default();
        let result = layout(&request, &config);

        assert!(result.is_complete(&request));
        assert_eq!(
            result.placements.iter().map(|p| p.piece_id.as_str()).collect_vec(),
            vec!["sleeve", "sleeve", "collar"]
        );
        assert_valid(&request, &result, &config);
    }

    #[test]
    fn bin_height_ceiling() {
        init_logger();
        let request = LayoutRequest::new(
            vec![rect_piece("a", 1000.0, 200.0), rect_piece("b", 1000.0, 200.0)],
            1000.0,
        )
        .with_bin_height(300.0);
        let config = FFDConfig::default();
        let result = layout(&request, &config);

        // a second layer would end at 410
        assert_eq!(result.n_placed(), 1);
        assert_eq!(result.unplaced(&request), vec!["b"]);
        assert_valid(&request, &result, &config);

        let taller = request.clone().with_bin_height(410.0);
        assert_eq!(layout(&taller, &config).n_placed(), 2);
    }

    #[test]
    fn evaluation_budget() {
        init_logger();
        let request = LayoutRequest::new(
            vec![
                rect_piece("a", 300.0, 100.0),
                rect_piece("b", 200.0, 100.0),
                rect_piece("c", 100.0, 100.0),
            ],
            1000.0,
        );
        let limited = FFDConfig {
            max_evaluations: Some(1),
            ..FFDConfig::default()
        };
        let result = layout(&request, &limited);
        assert_eq!(result.n_placed(), 1);
        assert_eq!(result.unplaced(&request), vec!["b", "c"]);

        let generous = FFDConfig {
            max_evaluations: Some(10_000),
            ..FFDConfig::default()
        };
        assert_eq!(
            layout(&request, &generous),
            layout(&request, &FFDConfig::default())
        );
    }

    #[test]
    fn config_asset_parses() {
        let file = std::fs::File::open("../assets/config.json").unwrap();
        let config: FFDConfig = serde_json::from_reader(file).unwrap();
        assert_eq!(config.scan_step, 25.0);
        assert_eq!(config.candidate_strategy, CandidateStrategy::ExtremePoints);

        let request = read_asset("../assets/shirt.json");
        let result = layout(&request, &config);
        assert_valid(&request, &result, &config);
    }
}
