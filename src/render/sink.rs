use macroquad::prelude::*;

use crate::command::DrawCommand;

/// Receives quads in paint order. Implementations must not reorder.
pub trait DrawSink<T> {
    /// Paint one quad on top of everything drawn before it.
    fn draw(&mut self, cmd: &DrawCommand<T>);
}

/// Immediate-mode sink drawing through macroquad.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadSink;

impl DrawSink<Texture2D> for MacroquadSink {
    fn draw(&mut self, cmd: &DrawCommand<Texture2D>) {
        let size = cmd.texture.size() * cmd.scale;
        let top_left = cmd.position - cmd.origin * cmd.scale;
        draw_texture_ex(
            &cmd.texture,
            top_left.x,
            top_left.y,
            cmd.tint,
            DrawTextureParams {
                dest_size: Some(size),
                ..Default::default()
            },
        );
    }
}

/// Sink that keeps every command, for headless use and tests.
#[derive(Debug, Clone)]
pub struct CommandBuffer<T> {
    /// Every command received, in paint order.
    pub commands: Vec<DrawCommand<T>>,
}

impl<T> Default for CommandBuffer<T> {
    fn default() -> Self {
        CommandBuffer {
            commands: Vec::new(),
        }
    }
}

impl<T> CommandBuffer<T> {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Clone> DrawSink<T> for CommandBuffer<T> {
    fn draw(&mut self, cmd: &DrawCommand<T>) {
        self.commands.push(cmd.clone());
    }
}
