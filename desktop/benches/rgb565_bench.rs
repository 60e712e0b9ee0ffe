use criterion::{Criterion, black_box, criterion_group, criterion_main};
use embedded_graphics::pixelcolor::Rgb888;
use pixconv_core::{
    Grid,
    bitmap::{self, PackedBitmap},
    literal,
    res::logo,
    rgb565,
};

fn gradient(width: usize, height: usize) -> Grid<Rgb888> {
    let mut grid = Grid::new(width, height, Rgb888::new(0, 0, 0));
    for y in 0..height {
        for x in 0..width {
            grid.set(x, y, Rgb888::new(x as u8, y as u8, (x ^ y) as u8));
        }
    }
    grid
}

fn bench_rgb565(c: &mut Criterion) {
    let image = gradient(320, 240);
    let packed = rgb565::encode_image(&image);

    c.bench_function("encode_image 320x240", |b| {
        b.iter(|| rgb565::encode_image(black_box(&image)))
    });
    c.bench_function("decode_image 320x240", |b| {
        b.iter(|| rgb565::decode_image(black_box(&packed)))
    });
    c.bench_function("array literal 320x240", |b| {
        b.iter(|| literal::serialize_as_array_literal(black_box(&packed), "image_array"))
    });
}

fn bench_expand(c: &mut Criterion) {
    let packed = PackedBitmap::new(logo::BYTE_ROWS, logo::COLUMNS, &logo::LOGO).unwrap();
    c.bench_function("expand logo", |b| b.iter(|| bitmap::expand(black_box(&packed))));
}

criterion_group!(benches, bench_rgb565, bench_expand);
criterion_main!(benches);
