use super::*;

fn no_fonts() -> RasterOptions<'static> {
    RasterOptions {
        fonts_dir: None,
        skip_system_fonts: true,
    }
}

#[test]
fn rasterize_fills_intrinsic_size() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"><rect x="0" y="0" width="2" height="2" fill="#ff0000"/></svg>"##;
    let img = rasterize(svg, &no_fonts()).unwrap();
    assert_eq!((img.width, img.height), (4, 2));
    assert_eq!(img.data.len(), 4 * 2 * 4);
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(3, 1), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(4, 0), None);
}

#[test]
fn translucent_pixels_are_straight_alpha() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1" fill="#ff0000" fill-opacity="0.5"/></svg>"##;
    let [r, g, b, a] = rasterize(svg, &no_fonts()).unwrap().pixel(0, 0).unwrap();
    assert!(r >= 254, "r={r}");
    assert_eq!((g, b), (0, 0));
    assert!((127..=128).contains(&a), "a={a}");
}

#[test]
fn malformed_svg_is_an_error() {
    assert!(rasterize("<svg", &no_fonts()).is_err());
}

#[test]
fn render_png_writes_file() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="#dc2626"/></svg>"##;
    let dir = std::path::PathBuf::from("target").join("unit-raster");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("solid.png");
    render_png(svg, &no_fonts(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
