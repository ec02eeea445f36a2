use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(lerp_u8(10, 200, 0), 10);
    assert_eq!(lerp_u8(10, 200, 255), 200);
}

#[test]
fn lerp_40_percent_weight() {
    // t = 102/255 = 0.4: 0.6*100 + 0.4*200 = 140
    assert_eq!(lerp_u8(100, 200, 102), 140);
}
