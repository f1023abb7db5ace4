use super::*;

#[test]
fn converts_hex_to_all_notations() {
    let out = convert("#ff0000").unwrap();
    assert_eq!(out.hex, "#ff0000");
    assert_eq!(out.rgb, "rgb(255, 0, 0)");
    assert_eq!(out.hsl, "hsl(0, 100%, 50%)");
}

#[test]
fn converts_rgb_function_input() {
    let out = convert("rgb(0, 128, 0)").unwrap();
    assert_eq!(out.hex, "#008000");
}

#[test]
fn converts_hsl_function_input() {
    let out = convert("hsl(240, 100%, 50%)").unwrap();
    assert_eq!(out.hex, "#0000ff");
    assert_eq!(out.rgb, "rgb(0, 0, 255)");
}

#[test]
fn rejects_unrecognized_input() {
    let err = convert("  chartreuse-ish ").unwrap_err();
    assert_eq!(err, "\"chartreuse-ish\" is not a HEX, rgb(), or hsl() color.");
}
