//! 9-patch regression test
//!
//! Border strip handling when the interior grows and shrinks, marker
//! validation and the corner invariant.

use resizer_core::color;
use resizer_test::RegParams;
use resizer_test::fixtures::{NinePatchBuilder, Side, gradient};
use resizer_transform::{Edge, NinePatch, TransformError, process_nine_patch};

#[test]
fn ninepatch_reg() {
    let mut rp = RegParams::new("ninepatch");

    // --- Test 1: 10x10 source, one stretch marker at interior row 3 ---
    let src = NinePatchBuilder::with_gradient(8, 8)
        .stretch(Side::Left, 3..4)
        .build()
        .expect("build 10x10");
    let out = process_nine_patch(&src, 8, 16).expect("grow to 8x16");
    rp.compare_values(10.0, out.width() as f64, 0.0);
    rp.compare_values(18.0, out.height() as f64, 0.0);
    rp.write_pix(&out, "grow").expect("write grow");

    // round(3 * 15 / 7) = 6 must be covered; the resampled run spans 5..=8
    let left: Vec<u32> = (1..=16)
        .map(|y| out.get_pixel(0, y).unwrap_or(color::TRANSPARENT))
        .collect();
    rp.check(left[6] == color::STRETCH_MARKER, "marker at strip row 6");
    for (row, &p) in left.iter().enumerate() {
        let expected = if (5..=8).contains(&row) {
            color::STRETCH_MARKER
        } else {
            color::TRANSPARENT
        };
        rp.compare_values(expected as f64, p as f64, 0.0);
    }

    // --- Test 2: Shrinking maps positions without blending ---
    let src = NinePatchBuilder::with_gradient(9, 9)
        .stretch(Side::Top, 2..5)
        .padding(Side::Bottom, 8..9)
        .padding(Side::Right, 0..1)
        .build()
        .expect("build 11x11");
    let out = process_nine_patch(&src, 5, 5).expect("shrink to 5x5");
    let top: Vec<u32> = (1..=5).map(|x| out.get_pixel_unchecked(x, 0)).collect();
    rp.compare_strings(
        &words(&top),
        &words(&[
            color::TRANSPARENT,
            color::STRETCH_MARKER,
            color::STRETCH_MARKER,
            color::TRANSPARENT,
            color::TRANSPARENT,
        ]),
    );
    rp.check(
        out.get_pixel(5, 6) == Some(color::PADDING_MARKER),
        "bottom padding marker lands on last position",
    );
    rp.check(
        out.get_pixel(6, 1) == Some(color::PADDING_MARKER),
        "right padding marker stays on first position",
    );

    // --- Test 3: Corners are transparent and the interior has the target size ---
    let src = NinePatchBuilder::with_gradient(12, 7)
        .stretch(Side::Left, 0..7)
        .stretch(Side::Top, 0..12)
        .padding(Side::Right, 1..6)
        .padding(Side::Bottom, 1..11)
        .build()
        .expect("build full ring");
    for (tw, th) in [(24, 14), (6, 3), (1, 1), (12, 7), (30, 2)] {
        let out = process_nine_patch(&src, tw, th).expect("process");
        for (x, y) in [(0, 0), (tw + 1, 0), (0, th + 1), (tw + 1, th + 1)] {
            rp.compare_values(0.0, out.get_pixel_unchecked(x, y) as f64, 0.0);
        }
        let trimmed = out.remove_border(1).expect("trim");
        rp.compare_values(tw as f64, trimmed.width() as f64, 0.0);
        rp.compare_values(th as f64, trimmed.height() as f64, 0.0);

        let patch = NinePatch::decompose(&out).expect("output is a valid 9-patch");
        rp.check(
            patch.content_dimensions() == (tw, th),
            "output decomposes to target interior",
        );
    }

    // --- Test 4: Same-size processing reproduces the source ---
    let same = process_nine_patch(&src, 12, 7).expect("same size");
    rp.compare_pix(&src, &same);

    // --- Test 5: Blue marker is rejected ---
    let blue = NinePatchBuilder::new(gradient(6, 6))
        .marker(Side::Top, 4, 0xff00_00ff)
        .build()
        .expect("build blue");
    match process_nine_patch(&blue, 12, 12) {
        Err(TransformError::MalformedNinePatch {
            edge,
            position,
            color,
        }) => {
            rp.check(edge == Edge::Top, "blue marker reported on top edge");
            rp.compare_values(4.0, position as f64, 0.0);
            rp.compare_values(0xff00_00ff_u32 as f64, color as f64, 0.0);
        }
        other => {
            rp.check(false, &format!("expected malformed 9-patch, got {:?}", other));
        }
    }

    // --- Test 6: Empty and all-black strips are valid ---
    let empty = NinePatchBuilder::with_gradient(4, 4).build().expect("empty ring");
    rp.check(NinePatch::decompose(&empty).is_ok(), "empty ring accepted");
    let black = NinePatchBuilder::with_gradient(4, 4)
        .stretch(Side::Left, 0..4)
        .stretch(Side::Right, 0..4)
        .stretch(Side::Top, 0..4)
        .stretch(Side::Bottom, 0..4)
        .build()
        .expect("black ring");
    rp.check(NinePatch::decompose(&black).is_ok(), "black ring accepted");

    assert!(rp.cleanup(), "ninepatch regression test failed");
}

fn words(pixels: &[u32]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
}
