use crate::model::Placement;
use serde_json::{Value, json};

/// Serialize a `Placement` as `{ fullness, container, blocks, freeRegions }`.
///
/// Each block carries its box (`x`, `y`, `w`, `h`), its one-based `label`,
/// both indices, the rotation in degrees and the `sizeKey` presenters use to
/// pick a colour.
pub fn to_json(placement: &Placement) -> Value {
    let blocks = placement
        .placements
        .iter()
        .map(|p| {
            json!({
                "label": p.label(),
                "orderIndex": p.order_index,
                "inputIndex": p.input_index,
                "x": p.left,
                "y": p.top,
                "w": p.width(),
                "h": p.height(),
                "rotation": p.rotation.degrees(),
                "sizeKey": p.size_key(),
            })
        })
        .collect::<Vec<_>>();
    let free = placement
        .free_regions
        .iter()
        .map(|r| json!({"x": r.left, "y": r.top, "w": r.width(), "h": r.height()}))
        .collect::<Vec<_>>();
    json!({
        "fullness": placement.fullness,
        "container": {"w": placement.container.width, "h": placement.container.height},
        "blocks": blocks,
        "freeRegions": free,
    })
}
