use super::*;
use crate::PreviewError;

#[test]
fn parse_accepts_ui_labels() {
    assert_eq!(
        GarmentType::parse("Round Neck").unwrap(),
        GarmentType::RoundNeck
    );
    assert_eq!(GarmentType::parse("V-Neck").unwrap(), GarmentType::VNeck);
    assert_eq!(GarmentType::parse("polo").unwrap(), GarmentType::Polo);
    assert_eq!(GarmentType::parse(" HOODIE ").unwrap(), GarmentType::Hoodie);
    assert_eq!(
        GarmentType::parse("round_neck").unwrap(),
        GarmentType::RoundNeck
    );
}

#[test]
fn parse_rejects_unknown_tags() {
    for tag in ["", "Crewneck", "Tank Top", "round neckline"] {
        match GarmentType::parse(tag) {
            Err(PreviewError::InvalidGarmentType(t)) => assert_eq!(t, tag),
            other => panic!("expected InvalidGarmentType for '{tag}', got {other:?}"),
        }
    }
}

#[test]
fn display_matches_ui_labels() {
    assert_eq!(GarmentType::RoundNeck.to_string(), "Round Neck");
    assert_eq!(GarmentType::VNeck.to_string(), "V-Neck");
}

#[test]
fn tint_from_hex_forms() {
    assert_eq!(
        TintColor::from_hex("#ff0000").unwrap(),
        TintColor {
            r: 255,
            g: 0,
            b: 0,
            a: 255
        }
    );
    assert_eq!(
        TintColor::from_hex("00ff7f").unwrap(),
        TintColor {
            r: 0,
            g: 255,
            b: 127,
            a: 255
        }
    );
    assert_eq!(
        TintColor::from_hex("#11223344").unwrap(),
        TintColor {
            r: 0x11,
            g: 0x22,
            b: 0x33,
            a: 0x44
        }
    );
    assert_eq!(TintColor::default(), TintColor::WHITE);
}

#[test]
fn tint_from_hex_rejects_malformed() {
    for s in ["", "#fff", "#ggpp00", "#ff00", "#ff0000ff00"] {
        assert!(
            matches!(TintColor::from_hex(s), Err(PreviewError::Validation(_))),
            "expected validation error for '{s}'"
        );
    }
}

#[test]
fn model_types_round_trip_json() {
    assert_eq!(
        serde_json::to_string(&GarmentType::RoundNeck).unwrap(),
        "\"round_neck\""
    );
    let g: GarmentType =
        serde_json::from_str(&serde_json::to_string(&GarmentType::VNeck).unwrap()).unwrap();
    assert_eq!(g, GarmentType::VNeck);

    let s: GarmentSize = serde_json::from_str("\"XL\"").unwrap();
    assert_eq!(s, GarmentSize::XL);
    assert_eq!(GarmentSize::default(), GarmentSize::M);

    let c: TintColor =
        serde_json::from_str(&serde_json::to_string(&TintColor::WHITE).unwrap()).unwrap();
    assert_eq!(c, TintColor::WHITE);
}

#[test]
fn request_defaults_are_white_and_medium() {
    let req = PreviewRequest::new(GarmentType::Polo, RgbaImage::new(1, 1));
    assert_eq!(req.tint, TintColor::WHITE);
    assert_eq!(req.size, GarmentSize::M);
}
