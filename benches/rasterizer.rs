use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastrum::math::vec2::Vec2;
use rastrum::math::vec4::Vec4;
use rastrum::render::{FillMode, RenderTarget, ScanlineRasterizer, Triangle};
use rastrum::{Engine, EngineConfig, Mesh, Texture};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn triangle(points: [(f32, f32); 3]) -> Triangle {
    let [a, b, c] = points;
    Triangle {
        points: [
            Vec4::new(a.0, a.1, 0.5, 2.0),
            Vec4::new(b.0, b.1, 0.5, 4.0),
            Vec4::new(c.0, c.1, 0.5, 3.0),
        ],
        texcoords: [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
        color: 0xFFFF0000,
        light_intensity: 0.8,
    }
}

fn small_triangle() -> Triangle {
    triangle([(100.0, 100.0), (120.0, 100.0), (110.0, 120.0)])
}

fn medium_triangle() -> Triangle {
    triangle([(100.0, 100.0), (300.0, 100.0), (200.0, 300.0)])
}

fn large_triangle() -> Triangle {
    triangle([(50.0, 50.0), (750.0, 100.0), (400.0, 550.0)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let rasterizer = ScanlineRasterizer::new();
    let texture = Texture::checkerboard(256, 8, 0xFFFFFFFF, 0xFF333333);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("solid", name), &triangle, |b, tri| {
            let mut target = RenderTarget::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let mut fb = target.as_framebuffer();
                fb.clear(0);
                rasterizer.fill(black_box(tri), FillMode::Solid, &mut fb);
            });
        });

        group.bench_with_input(BenchmarkId::new("textured", name), &triangle, |b, tri| {
            let mut target = RenderTarget::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                let mut fb = target.as_framebuffer();
                fb.clear(0);
                rasterizer.fill(black_box(tri), FillMode::Textured(&texture), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let rasterizer = ScanlineRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                triangle([(x, y), (x + 35.0, y), (x + 17.5, y + 25.0)])
            })
        })
        .collect();

    group.bench_function("solid_400_triangles", |b| {
        let mut target = RenderTarget::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            let mut fb = target.as_framebuffer();
            fb.clear(0);
            for tri in &triangles {
                rasterizer.fill(black_box(tri), FillMode::Solid, &mut fb);
            }
        });
    });

    group.finish();
}

fn benchmark_cube_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let config = EngineConfig::default();
    let texture = Texture::checkerboard(64, 8, 0xFFFFFFFF, 0xFF333333);
    let mut mesh = Mesh::cube();
    mesh.transform
        .set_position_xyz(0.0, 0.0, 4.0)
        .set_rotation_xyz(0.4, 0.6, 0.0);

    let Ok(mut engine) = Engine::new(&config) else {
        return;
    };
    engine.draw_mode_mut().set_solid(false).set_textured(true);

    group.bench_function("textured_cube", |b| {
        let mut target = RenderTarget::new(config.width, config.height);
        b.iter(|| {
            let mut fb = target.as_framebuffer();
            engine
                .render_frame(black_box(&mesh), Some(&texture), &mut fb)
                .ok()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_cube_frame
);
criterion_main!(benches);
