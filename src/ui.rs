//! Draw list generation
//!
//! Turns a [`RenderSnapshot`] into backend-agnostic primitives (clear, circle,
//! rect, text). Whatever owns the window maps these onto its own calls.

use glam::Vec2;
use serde::Serialize;

use crate::config::GameConfig;
use crate::consts::FONT_WIDTH;
use crate::sim::{GamePhase, RenderSnapshot, TurnResult};

/// Palette used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Navy,
    White,
    Yellow,
    Pink,
    Lime,
    Red,
    Orange,
    Cyan,
    Purple,
}

/// Celebration text cycles through these, one step every 3 frames
pub const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Lime,
    Color::Cyan,
    Color::Purple,
];

/// Width of the idle bar stub drawn at the right edge
const BAR_STUB_WIDTH: f32 = 8.0;
const BAR_THICKNESS: f32 = 3.0;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Top-left corner plus size
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Top-left corner of the first glyph
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// Result banner for a finished turn
pub fn result_message(result: TurnResult) -> String {
    match result {
        TurnResult::Miss => "MISS!".to_string(),
        TurnResult::Skewered(hits) => format!("DANGO {} Bros.!", hits),
    }
}

/// Extra praise for big skewers
pub fn celebration_message(hits: u32) -> Option<&'static str> {
    match hits {
        3 => Some("Congratulations!!"),
        4 => Some("Amazing!!"),
        5 => Some("Legendary!!"),
        _ => None,
    }
}

/// Left edge that centers `text` on a screen `screen_width` wide
#[inline]
pub fn centered_x(text: &str, screen_width: f32) -> f32 {
    (screen_width - text.chars().count() as f32 * FONT_WIDTH) / 2.0
}

/// Rainbow color of glyph `index` on frame `frame`
#[inline]
pub fn rainbow_color(index: usize, frame: u64) -> Color {
    let step = (index as u64 + frame / 3) % RAINBOW.len() as u64;
    RAINBOW[step as usize]
}

/// Build everything to draw this frame
pub fn draw_list(snapshot: &RenderSnapshot, config: &GameConfig, frame: u64) -> Vec<DrawCommand> {
    let width = config.screen_width;
    let mid_y = config.screen_height / 2.0;
    let mut cmds = vec![DrawCommand::Clear(Color::Navy)];

    // Bar: full length while flying, a short stub at the edge while aiming
    let bar = &snapshot.bar;
    let (bar_x, bar_len) = if bar.is_firing {
        (bar.x, bar.length)
    } else {
        (width - BAR_STUB_WIDTH, BAR_STUB_WIDTH)
    };
    cmds.push(DrawCommand::Rect {
        pos: Vec2::new(bar_x, bar.y - 1.0),
        size: Vec2::new(bar_len, BAR_THICKNESS),
        color: Color::White,
    });

    for target in &snapshot.targets {
        cmds.push(DrawCommand::Circle {
            center: Vec2::new(target.x, target.y),
            radius: target.radius,
            color: if target.is_hit {
                Color::Yellow
            } else {
                Color::Pink
            },
        });
    }

    cmds.push(DrawCommand::Text {
        pos: Vec2::new(5.0, 5.0),
        text: format!("SCORE: {}", snapshot.score),
        color: Color::White,
    });
    if let Some(hits) = snapshot.hit_count {
        cmds.push(DrawCommand::Text {
            pos: Vec2::new(width - 60.0, 5.0),
            text: format!("HIT: {}", hits),
            color: Color::Lime,
        });
    }

    if snapshot.phase == GamePhase::Stuck {
        let hits = snapshot.last_hit_count;
        let message = result_message(TurnResult::from_hits(hits));
        cmds.push(DrawCommand::Text {
            pos: Vec2::new(centered_x(&message, width), mid_y - 20.0),
            text: message,
            color: Color::White,
        });

        if let Some(praise) = celebration_message(hits) {
            let start_x = centered_x(praise, width);
            for (i, ch) in praise.chars().enumerate() {
                cmds.push(DrawCommand::Text {
                    pos: Vec2::new(start_x + i as f32 * FONT_WIDTH, mid_y - 4.0),
                    text: ch.to_string(),
                    color: rainbow_color(i, frame),
                });
            }
        }

        let prompt = "CLICK TO CONTINUE";
        cmds.push(DrawCommand::Text {
            pos: Vec2::new(centered_x(prompt, width), mid_y + 20.0),
            text: prompt.to_string(),
            color: Color::White,
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    fn texts(cmds: &[DrawCommand]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn stuck_with_hits(hits: u32) -> RenderSnapshot {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        let mut snapshot = state.snapshot();
        snapshot.phase = GamePhase::Stuck;
        snapshot.last_hit_count = hits;
        snapshot
    }

    #[test]
    fn test_messages() {
        assert_eq!(result_message(TurnResult::Miss), "MISS!");
        assert_eq!(result_message(TurnResult::Skewered(4)), "DANGO 4 Bros.!");
        assert_eq!(celebration_message(2), None);
        assert_eq!(celebration_message(5), Some("Legendary!!"));
    }

    #[test]
    fn test_centering() {
        // 5 glyphs * 4 px = 20 px wide on a 320 px screen
        assert_eq!(centered_x("MISS!", 320.0), 150.0);
    }

    #[test]
    fn test_rainbow_cycles_every_three_frames() {
        assert_eq!(rainbow_color(0, 0), Color::Red);
        assert_eq!(rainbow_color(0, 2), Color::Red);
        assert_eq!(rainbow_color(0, 3), Color::Orange);
        assert_eq!(rainbow_color(1, 0), Color::Orange);
        assert_eq!(rainbow_color(6, 0), Color::Red);
        assert_eq!(rainbow_color(5, 3), Color::Red);
    }

    #[test]
    fn test_ready_frame() {
        let config = GameConfig::default();
        let state = GameState::new(config.clone(), 1).unwrap();
        let cmds = draw_list(&state.snapshot(), &config, 0);

        assert_eq!(cmds[0], DrawCommand::Clear(Color::Navy));
        assert_eq!(
            cmds[1],
            DrawCommand::Rect {
                pos: Vec2::new(312.0, 119.0),
                size: Vec2::new(8.0, 3.0),
                color: Color::White,
            }
        );
        let circles = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { color: Color::Pink, .. }))
            .count();
        assert_eq!(circles, 5);
        assert_eq!(texts(&cmds), vec!["SCORE: 0"]);
    }

    #[test]
    fn test_firing_frame_shows_hit_counter() {
        let config = GameConfig::default();
        let mut state = GameState::new(config.clone(), 1).unwrap();
        let snapshot = tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        let cmds = draw_list(&snapshot, &config, 0);
        assert!(matches!(
            cmds[1],
            DrawCommand::Rect { size, .. } if size.x == 100.0
        ));
        assert!(texts(&cmds).contains(&"HIT: 0"));
    }

    #[test]
    fn test_miss_screen() {
        let config = GameConfig::default();
        let cmds = draw_list(&stuck_with_hits(0), &config, 0);
        let texts = texts(&cmds);
        assert!(texts.contains(&"MISS!"));
        assert!(texts.contains(&"CLICK TO CONTINUE"));
        assert_eq!(texts.len(), 3);
    }

    #[test]
    fn test_celebration_is_per_glyph() {
        let config = GameConfig::default();
        let cmds = draw_list(&stuck_with_hits(4), &config, 3);
        let glyphs: Vec<&DrawCommand> = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { pos, .. } if pos.y == 116.0))
            .collect();
        assert_eq!(glyphs.len(), "Amazing!!".len());
        assert!(matches!(
            glyphs[0],
            DrawCommand::Text { color: Color::Orange, text, .. } if text == "A"
        ));
        assert!(texts(&cmds).contains(&"DANGO 4 Bros.!"));
    }
}
