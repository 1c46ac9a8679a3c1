//! Integration tests for hex/RGB/HSV conversion through the public API.

use spritedye::models::{wrap_hue, ColorError, HexColor, HsvColor, HueWheel, RgbColor};

#[test]
fn test_hex_roundtrip_lowercases() {
    for hex in ["#000000", "#FFFFFF", "#c86432", "#AbCdEf", "#0a0B0c", "#7F7f80"] {
        let rgb = RgbColor::from_hex(hex).unwrap();
        assert_eq!(rgb.to_hex(), hex.to_lowercase());
    }
}

#[test]
fn test_hex_roundtrip_every_channel_value() {
    for value in 0..=255u8 {
        let hex = format!("#{value:02X}{:02x}{value:02x}", 255 - value);
        assert_eq!(RgbColor::from_hex(&hex).unwrap().to_hex(), hex.to_lowercase());
    }
}

#[test]
fn test_hex_parsing() {
    assert_eq!(
        RgbColor::from_hex("#ff00ff").unwrap(),
        RgbColor::new(255, 0, 255)
    );
    assert!(matches!(
        RgbColor::from_hex("#aaa"),
        Err(ColorError::InvalidFormat(_))
    ));
    assert!("c86432".parse::<HexColor>().is_err());
    assert_eq!("#C86432".parse::<HexColor>().unwrap().as_str(), "#c86432");
}

#[test]
fn test_unclamped_channels() {
    assert_eq!(
        RgbColor::from_unclamped(255.0, 255.0, 275.0).to_hex(),
        "#ffffff"
    );
    assert_eq!(
        RgbColor::from_unclamped(-1.0, -57.0, 4000.0).to_hex(),
        "#0000ff"
    );
    assert_eq!(
        RgbColor::from_unclamped(f64::INFINITY, f64::NEG_INFINITY, f64::NAN).to_hex(),
        "#000000"
    );
}

#[test]
fn test_hsv_roundtrip_within_tolerance() {
    let samples = [
        RgbColor::new(0, 0, 0),
        RgbColor::new(255, 255, 255),
        RgbColor::new(128, 128, 128),
        RgbColor::new(37, 37, 37),
        RgbColor::new(255, 0, 0),
        RgbColor::new(0, 255, 0),
        RgbColor::new(0, 0, 255),
        RgbColor::new(255, 255, 0),
        RgbColor::new(0, 255, 255),
        RgbColor::new(255, 0, 255),
    ];

    for rgb in samples {
        let back = rgb.to_hsv().to_rgb();
        for (a, b) in [
            (rgb.red, back.red),
            (rgb.green, back.green),
            (rgb.blue, back.blue),
        ] {
            assert!(a.abs_diff(b) <= 1, "{rgb} came back as {back}");
        }
    }
}

#[test]
fn test_hsv_to_hex() {
    assert_eq!(HsvColor::new(0.0, 100.0, 100.0).to_hex(), "#ff0000");
    assert_eq!(HsvColor::new(480.0, 100.0, 100.0).to_hex(), "#00ff00");
    assert_eq!(HsvColor::from_hex("#0000ff").unwrap(), HsvColor::new(240.0, 100.0, 100.0));
}

#[test]
fn test_wrap_hue_properties() {
    for x in [-1e6, -720.5, -360.0, -0.25, 0.0, 1.5, 359.999, 360.0, 1e6 + 0.5] {
        let wrapped = wrap_hue(x);
        assert!((0.0..360.0).contains(&wrapped), "wrap_hue({x}) = {wrapped}");
        assert!((wrap_hue(x + 360.0) - wrapped).abs() < 1e-9);
    }
}

#[test]
fn test_hue_wheel_picks_and_places() {
    let wheel = HueWheel::new(100.0, 100.0, 40.0, 60.0);

    let hue = wheel.hue_at(100.0, 150.0).unwrap();
    assert!((hue - 90.0).abs() < 1e-9);
    assert!(wheel.hue_at(100.0, 100.0).is_none());

    let (x, y) = wheel.handle_position(hue);
    let picked = wheel.hue_at(x, y).unwrap();
    assert!((picked - hue).abs() < 1e-9);
}
