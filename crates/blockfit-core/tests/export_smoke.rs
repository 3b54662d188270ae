use blockfit_core::prelude::*;

#[test]
fn export_json_smoke() {
    let blocks = [Block::new(10.0, 10.0), Block::new(32.0, 16.0)];
    let out = pack(&blocks, Container::new(256.0, 256.0)).expect("pack");

    let v = to_json(&out);
    let obj = v.as_object().expect("object");
    assert!(obj.contains_key("fullness"));
    assert!(obj.contains_key("container"));
    assert!(obj.contains_key("freeRegions"));

    let first = &v["blocks"][0];
    assert_eq!(first["label"], 1);
    assert_eq!(first["orderIndex"], 0);
    assert_eq!(first["inputIndex"], 1);
    assert_eq!(first["x"], 0.0);
    assert_eq!(first["w"], 32.0);
    assert_eq!(first["h"], 16.0);
    assert_eq!(first["rotation"], 0);
    assert_eq!(first["sizeKey"], "32x16");
    assert_eq!(v["blocks"][1]["sizeKey"], "10x10");
    assert_eq!(v["container"]["w"], 256.0);
}

#[test]
fn export_empty_placement() {
    let out = pack(&[], Container::new(50.0, 50.0)).expect("pack");
    let v = to_json(&out);

    assert_eq!(v["blocks"].as_array().map(Vec::len), Some(0));
    assert_eq!(v["fullness"], 0.0);
    assert_eq!(v["freeRegions"].as_array().map(Vec::len), Some(1));
}

#[test]
fn placement_serde_roundtrip() {
    let out = pack(&[Block::new(3.0, 4.0)], Container::new(10.0, 10.0)).expect("pack");
    let s = serde_json::to_string(&out).expect("serialize");
    assert!(s.contains("\"rotation\":\"none\""));
    let back: Placement = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back, out);
}
