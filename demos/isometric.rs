use macroquad::prelude::*;
use macroquad_iso_tiles::{
    cursor_bob, selection_overlays, Cursor, EngineConfig, FrameParams, Grid, MacroquadSink,
    Rotation, SelectionStyle, Tile, TileCoord, TileEngine,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Isometric".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

/// Flat diamond filling a 64x42 texture, top face 32px tall.
fn diamond(fill: Color, edge: Color) -> Texture2D {
    let (w, h) = (64u16, 42u16);
    let mut img = Image::gen_image_color(w, h, Color::new(0.0, 0.0, 0.0, 0.0));
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let dx = (x - 32).abs() as f32 / 32.0;
            let top = (y - 16).abs() as f32 / 16.0;
            if dx + top <= 1.0 {
                let c = if dx + top > 0.9 { edge } else { fill };
                img.set_pixel(x as u32, y as u32, c);
            } else if y >= 16 && dx <= 1.0 && (y as f32) <= 16.0 + 16.0 * (1.0 - dx) + 10.0 {
                img.set_pixel(x as u32, y as u32, edge);
            }
        }
    }
    let tex = Texture2D::from_image(&img);
    tex.set_filter(FilterMode::Nearest);
    tex
}

fn build_grid() -> anyhow::Result<Grid> {
    Ok(Grid::from_fn(50, 50, |c| {
        if c.x % 10 == 0 || c.y % 10 == 0 {
            Tile::new(0, (0..6).map(|i| i % 10).collect())
        } else {
            Tile::new(0, vec![((c.x + c.y) % 10) as usize])
        }
    })?)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        log::error!("{err:#}");
    }
}

async fn run() -> anyhow::Result<()> {
    let mut engine: TileEngine = TileEngine::new(EngineConfig::default(), build_grid()?)?;
    let ty = engine.add_type();
    for i in 0..10 {
        let shade = 0.3 + i as f32 * 0.07;
        engine.add_texture(ty, diamond(Color::new(0.2, shade, 0.3, 1.0), DARKGREEN))?;
    }

    let cursor_rest = vec2(32.0, 42.0);
    let mut style = SelectionStyle {
        highlight: diamond(Color::new(1.0, 1.0, 1.0, 0.6), WHITE),
        highlight_origin: vec2(32.0, 16.0),
        highlight_tint: Color::new(0.0, 0.3, 1.0, 0.8),
        cursor: diamond(YELLOW, ORANGE),
        cursor_origin: cursor_rest,
    };

    let mut rotation = Rotation::Deg0;
    let mut scale = 1.0f32;
    let mut offset = vec2(100.0, 360.0);
    let mut cursor = Cursor::new(TileCoord::new(0, 0));

    loop {
        let dt = get_frame_time();
        let mut pan = Vec2::ZERO;
        if is_key_down(KeyCode::A) {
            pan.x += 1.0;
        }
        if is_key_down(KeyCode::D) {
            pan.x -= 1.0;
        }
        if is_key_down(KeyCode::W) {
            pan.y += 1.0;
        }
        if is_key_down(KeyCode::S) {
            pan.y -= 1.0;
        }
        offset += pan * 256.0 * dt;

        if is_key_pressed(KeyCode::Q) {
            rotation = rotation.add(1);
        }
        if is_key_pressed(KeyCode::E) {
            rotation = rotation.add(-1);
        }
        if is_key_down(KeyCode::R) {
            scale = (scale + 0.01).min(5.0);
        }
        if is_key_down(KeyCode::F) {
            scale = (scale - 0.01).max(0.05);
        }

        let mut step = TileCoord::default();
        if is_key_pressed(KeyCode::Left) {
            step.x -= 1;
        }
        if is_key_pressed(KeyCode::Right) {
            step.x += 1;
        }
        if is_key_pressed(KeyCode::Up) {
            step.y -= 1;
        }
        if is_key_pressed(KeyCode::Down) {
            step.y += 1;
        }
        if step != TileCoord::default() {
            cursor.move_by(step, rotation, engine.map_size());
        }

        clear_background(Color::new(0.39, 0.58, 0.93, 1.0));

        let viewport = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let frame = FrameParams::new(viewport, offset, scale, rotation);
        style.cursor_origin = cursor_rest + cursor_bob(get_time());
        let overlays = selection_overlays(engine.grid(), cursor.position, &style);
        engine.draw(&frame, overlays, &mut MacroquadSink)?;

        draw_text(
            &format!(
                "FPS: {}  rot: {}  cursor: ({}, {})",
                get_fps(),
                rotation.degrees(),
                cursor.position.x,
                cursor.position.y
            ),
            20.0,
            30.0,
            30.0,
            RED,
        );

        next_frame().await;
    }
}
