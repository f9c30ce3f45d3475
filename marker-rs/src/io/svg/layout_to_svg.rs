use log::warn;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{LayoutRequest, LayoutResult};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use crate::io::export::place_outline;
use crate::io::preview::view_bbox;
use crate::io::svg::svg_util::{SvgDrawOptions, data_to_path, outline_data, rect_data};

/// Renders the placed pieces of `result` on top of the consumed part of the roll.
pub fn layout_to_svg(
    request: &LayoutRequest,
    result: &LayoutResult,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bin_rect = Rect {
        x_min: 0.0,
        y_min: 0.0,
        x_max: request.bin_width.max(0.0),
        y_max: result.used_length.max(0.0),
    };

    let content_bbox = match view_bbox(&request.pieces, result) {
        Some(bbox) => Rect::bounding_rect(bbox, bin_rect),
        None => bin_rect,
    };
    let margin = 0.05 * f64::max(content_bbox.width(), content_bbox.height()).max(1.0);
    let vbox = content_bbox.inflate(margin);

    let theme = &options.theme;
    let font_size = 0.025 * f64::max(vbox.width(), vbox.height());
    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        let n_unplaced = request.pieces.len().saturating_sub(result.n_placed());
        let label_content = format!(
            "width: {:.1} | length: {:.1} | efficiency: {:.3}% | unplaced: {} | {}",
            bin_rect.width(),
            bin_rect.height(),
            result.efficiency.unwrap_or(0.0) * 100.0,
            n_unplaced,
            title,
        );
        Text::new(label_content)
            .set("x", vbox.x_min as f32)
            .set("y", (content_bbox.y_min - 0.5 * margin) as f32)
            .set("font-size", font_size as f32)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw bin
    let bin_group = Group::new()
        .set("id", "bin")
        .add(data_to_path(
            rect_data(bin_rect),
            &[
                ("fill", &*format!("{}", theme.bin_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bin, width: {:.3}, used length: {:.3}",
            bin_rect.width(),
            bin_rect.height()
        )));

    //draw pieces
    let mut pieces_group = Group::new().set("id", "pieces");
    let mut labels_group = Group::new().set("id", "labels");
    let matched = result.matched_pieces(&request.pieces);
    if matched.len() < result.n_placed() {
        warn!(
            "[SVG] {} placement(s) without a matching piece in request, skipping",
            result.n_placed() - matched.len()
        );
    }
    for (placement, piece) in matched {
        let placed = place_outline(&piece.outline, placement);
        let bbox = placed.bbox();

        let mut piece_group = Group::new()
            .set("id", format!("piece_{}", piece.id))
            .add(Title::new(format!(
                "piece, id: {}, transf: [{}]",
                piece.id,
                placement.d_transformation()
            )))
            .add(data_to_path(
                outline_data(&placed),
                &[
                    ("fill", &*format!("{}", theme.piece_fill)),
                    ("stroke-width", &*format!("{}", stroke_width)),
                    ("fill-rule", "nonzero"),
                    ("stroke", "black"),
                    ("opacity", "0.9"),
                ],
            ));

        if options.draw_bboxes {
            piece_group = piece_group.add(data_to_path(
                rect_data(bbox),
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.bbox_stroke)),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            ));
        }
        pieces_group = pieces_group.add(piece_group);

        if options.draw_labels {
            let c = bbox.centroid();
            let size = 0.25 * f64::min(bbox.width(), bbox.height()).max(1.0);
            labels_group = labels_group.add(
                Text::new(piece.id.clone())
                    .set("x", c.x() as f32)
                    .set("y", c.y() as f32)
                    .set("font-size", size.min(font_size) as f32)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("fill", format!("{}", theme.label_fill)),
            );
        }
    }

    let vbox_svg = (
        vbox.x_min as f32,
        vbox.y_min as f32,
        vbox.width() as f32,
        vbox.height() as f32,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(bin_group)
        .add(pieces_group)
        .add(labels_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Piece, Placement};
    use crate::geometry::Rotation;
    use crate::geometry::primitives::Outline;

    #[test]
    fn renders_every_placed_piece() {
        let piece = |id: &str| Piece::new(id, Outline::from(Rect::try_new(0.0, 0.0, 200.0, 100.0).unwrap()));
        let request = LayoutRequest::new(vec![piece("front"), piece("back"), piece("collar")], 1000.0);
        let placement = |id: &str, x: f64| Placement {
            piece_id: id.into(),
            x,
            y: 0.0,
            rotation: Rotation::R0,
            flipped: false,
        };
        let result = LayoutResult {
            placements: vec![placement("front", 0.0), placement("back", 250.0)],
            utilized_area: 40000.0,
            bin_area: 45000.0,
            efficiency: Some(40000.0 / 45000.0),
            used_length: 100.0,
        };

        let svg = layout_to_svg(&request, &result, SvgDrawOptions::default(), "test").to_string();
        assert!(svg.contains("piece_front"));
        assert!(svg.contains("piece_back"));
        assert!(!svg.contains("piece_collar"));
        assert!(svg.contains("unplaced: 1"));
    }
}
