use image::{GenericImageView, Rgba};
use qrpng::{EccLevel, Error, QrCodeGenerator, QrcodeEncoder, SymbolEncoder};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn decode(bytes: &[u8]) -> image::DynamicImage {
    image::load_from_memory(bytes).expect("output should decode as an image")
}

#[test]
fn hello_is_290_pixels_square() {
    let png = qrpng::generate("HELLO").unwrap();
    assert!(!png.is_empty());
    let img = decode(&png);
    assert_eq!(img.dimensions(), (290, 290));
}

#[test]
fn empty_text_is_invalid_argument() {
    match qrpng::generate("") {
        Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "text"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert!(matches!(qrpng::generate_opt(None), Err(Error::InvalidArgument { .. })));
}

#[test]
fn decoded_blocks_match_module_grid() {
    let text = "https://example.com/some/path?q=1";
    let grid = QrcodeEncoder.encode(text, EccLevel::Medium).unwrap();
    let img = decode(&qrpng::generate(text).unwrap()).to_rgba8();

    let size = grid.size();
    assert_eq!(img.width(), (size + 8) * 10);

    for y in 0..size {
        for x in 0..size {
            let expected = if grid.get_module(x as i32, y as i32) { BLACK } else { WHITE };
            let left = (x + 4) * 10;
            let top = (y + 4) * 10;
            for py in top..top + 10 {
                for px in left..left + 10 {
                    assert_eq!(*img.get_pixel(px, py), expected, "module ({}, {})", x, y);
                }
            }
        }
    }
}

#[test]
fn border_is_uniformly_white() {
    let img = decode(&qrpng::generate("border check").unwrap()).to_rgba8();
    let total = img.width();
    for (x, y, pixel) in img.enumerate_pixels() {
        if x < 40 || y < 40 || x >= total - 40 || y >= total - 40 {
            assert_eq!(*pixel, WHITE, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let a = qrpng::generate("same input").unwrap();
    let b = qrpng::generate("same input").unwrap();
    assert_eq!(a, b);
}

#[test]
fn too_long_text_is_encoding_error() {
    let text = "a".repeat(3000);
    assert!(matches!(qrpng::generate(&text), Err(Error::Encoding(_))));
}

#[test]
fn custom_options_change_dimensions() {
    let generator = QrCodeGenerator::builder()
        .ecc(EccLevel::Low)
        .scale(3)
        .border(2)
        .build();
    let grid = QrcodeEncoder.encode("HELLO", EccLevel::Low).unwrap();
    let img = decode(&generator.generate("HELLO").unwrap());
    assert_eq!(img.width(), (grid.size() + 4) * 3);
    assert_eq!(img.width(), img.height());
}

#[test]
fn zero_scale_is_rejected() {
    let generator = QrCodeGenerator::builder().scale(0).build();
    assert!(matches!(
        generator.generate("HELLO"),
        Err(Error::InvalidArgument { name: "scale", .. })
    ));
}

#[test]
fn oversized_bitmap_is_rejected_before_allocating() {
    let generator = QrCodeGenerator::builder().scale(65536).build();
    assert!(matches!(
        generator.generate("HELLO"),
        Err(Error::InvalidArgument { name: "scale", .. })
    ));
}
