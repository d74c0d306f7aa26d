//! PNG I/O regression test
//!
//! Every stored PNG color type decodes to 8-bit ARGB; files written by
//! the resizer read back unchanged.

use png::{BitDepth, ColorType, Encoder};
use resizer_core::color;
use resizer_io::{IoError, read_image, read_image_mem, write_image};
use resizer_test::{RegParams, fixtures};

fn encode<F>(width: u32, height: u32, setup: F, data: &[u8]) -> Vec<u8>
where
    F: FnOnce(&mut Encoder<'_, &mut Vec<u8>>),
{
    let mut buffer = Vec::new();
    {
        let mut encoder = Encoder::new(&mut buffer, width, height);
        setup(&mut encoder);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(data).expect("png data");
    }
    buffer
}

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    // --- Test 1: Palette with transparency ---
    let bytes = encode(
        3,
        1,
        |e| {
            e.set_color(ColorType::Indexed);
            e.set_depth(BitDepth::Eight);
            e.set_palette(vec![0, 0, 0, 255, 0, 0, 10, 20, 30]);
            e.set_trns(vec![255, 255, 0]);
        },
        &[0, 1, 2],
    );
    let pix = read_image_mem(&bytes).expect("decode palette");
    let px = |x| pix.get_pixel_unchecked(x, 0) as f64;
    rp.compare_values(color::STRETCH_MARKER as f64, px(0), 0.0);
    rp.compare_values(color::PADDING_MARKER as f64, px(1), 0.0);
    rp.compare_values(0.0, color::alpha(pix.get_pixel_unchecked(2, 0)) as f64, 0.0);

    // --- Test 2: 16-bit RGBA keeps the high byte ---
    let bytes = encode(
        1,
        1,
        |e| {
            e.set_color(ColorType::Rgba);
            e.set_depth(BitDepth::Sixteen);
        },
        &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xff, 0xff],
    );
    let pix = read_image_mem(&bytes).expect("decode 16-bit");
    rp.compare_values(0xff12_569a_u32 as f64, pix.get_pixel_unchecked(0, 0) as f64, 0.0);

    // --- Test 3: 1-bit grayscale expands to black and white ---
    let bytes = encode(
        8,
        1,
        |e| {
            e.set_color(ColorType::Grayscale);
            e.set_depth(BitDepth::One);
        },
        &[0b1000_0001],
    );
    let pix = read_image_mem(&bytes).expect("decode 1-bit");
    let px = |x| pix.get_pixel_unchecked(x, 0) as f64;
    rp.compare_values(0xffff_ffff_u32 as f64, px(0), 0.0);
    rp.compare_values(color::STRETCH_MARKER as f64, px(1), 0.0);
    rp.compare_values(0xffff_ffff_u32 as f64, px(7), 0.0);

    // --- Test 4: File round trip of a 9-patch keeps markers exact ---
    let tmp = tempfile::tempdir().expect("tempdir");
    let patch = fixtures::NinePatchBuilder::with_gradient(7, 5)
        .stretch(fixtures::Side::Left, 1..4)
        .padding(fixtures::Side::Bottom, 0..7)
        .build()
        .expect("fixture");
    let path = tmp.path().join("patch.9.png");
    write_image(&patch, &path).expect("write");
    let back = read_image(&path).expect("read");
    rp.compare_pix(&patch, &back);

    // --- Test 5: Non-PNG and missing files ---
    let jpeg = read_image_mem(b"\xff\xd8\xff\xe0JFIF");
    rp.check(
        matches!(jpeg, Err(IoError::UnsupportedFormat(_))),
        "JPEG signature rejected",
    );
    rp.check(
        matches!(read_image(tmp.path().join("missing.png")), Err(IoError::Io(_))),
        "missing file reported as I/O error",
    );

    assert!(rp.cleanup(), "pngio regression test failed");
}
