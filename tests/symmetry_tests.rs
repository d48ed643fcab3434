use seedpix::*;

fn decoded(options: &Options) -> image::RgbaImage {
    let encoded = randpix(options).unwrap();
    image::load_from_memory(encoded.bytes())
        .unwrap()
        .into_rgba8()
}

#[test]
fn test_vertical_symmetry_in_pixels() {
    for size in [8_u32, 9] {
        let img = decoded(&Options {
            seed: "mirror me".into(),
            size,
            scale: 1,
            symmetry: Symmetry::Vertical,
            color_bias: 25,
            ..Options::default()
        });
        for y in 0..size {
            for x in 0..size {
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(size - 1 - x, y),
                    "seed 'mirror me', size {size}, row {y}, col {x}"
                );
            }
        }
    }
}

#[test]
fn test_horizontal_symmetry_in_pixels() {
    for size in [8_u32, 9] {
        let img = decoded(&Options {
            seed: "mirror me".into(),
            size,
            scale: 1,
            symmetry: Symmetry::Horizontal,
            ..Options::default()
        });
        for y in 0..size {
            for x in 0..size {
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(x, size - 1 - y)
                );
            }
        }
    }
}

#[test]
fn test_quad_symmetry_in_pixels() {
    for size in [8_u32, 9] {
        let img = decoded(&Options {
            seed: "mirror me".into(),
            size,
            scale: 1,
            symmetry: Symmetry::Quad,
            grayscale_bias: true,
            color_bias: 40,
            ..Options::default()
        });
        for y in 0..size {
            for x in 0..size {
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(size - 1 - x, y)
                );
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(x, size - 1 - y)
                );
            }
        }
    }
}

#[test]
fn test_symmetry_holds_under_scaling() {
    let scale = 5_u32;
    let size = 10_u32;
    let img = decoded(&Options {
        seed: "scaled".into(),
        size,
        scale,
        symmetry: Symmetry::Vertical,
        ..Options::default()
    });
    let side = size * scale;
    assert_eq!(img.dimensions(), (side, side));
    for y in 0..side {
        for x in 0..side {
            assert_eq!(img.get_pixel(x, y), img.get_pixel(side - 1 - x, y));
        }
    }
}
