//! Gesture scripts for driving a [`Canvas`] without a window.
//!
//! A script is a stream of whitespace-separated commands. Anything after `#`
//! on a line is ignored.
//!
//! ```text
//! mode rectangle
//! down 10 10
//! move 50 40
//! up 50 40      # commits the rectangle
//! click 30 25   # press and release without moving
//! color 1 0 0
//! alpha 0.5
//! zoom 3
//! pan 20 0
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};
use vecdraw_core::{Color, DrawingMode, Point};
use vecdraw_designer::Canvas;

/// One replayable step. Coordinates are in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Mode(DrawingMode),
    Down(Point),
    Move(Point),
    Up(Point),
    Click(Point),
    Color(Color),
    Alpha(f64),
    Zoom(usize),
    Pan(Point),
}

impl Command {
    pub fn apply(&self, canvas: &mut Canvas) -> anyhow::Result<()> {
        match *self {
            Command::Mode(mode) => canvas.set_draw_mode(mode),
            Command::Down(p) => canvas.on_pointer_down(p),
            Command::Move(p) => canvas.on_pointer_move(p),
            Command::Up(p) => canvas.on_pointer_up(p),
            Command::Click(p) => {
                canvas.on_pointer_down(p);
                canvas.on_pointer_up(p);
            }
            Command::Color(color) => canvas.set_draw_color(color),
            Command::Alpha(alpha) => canvas.set_alpha(alpha),
            Command::Zoom(index) => canvas.set_zoom_level(index)?,
            Command::Pan(offset) => canvas.set_pan_offset(offset.x, offset.y),
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Mode(mode) => write!(f, "mode {}", mode),
            Command::Down(p) => write!(f, "down {} {}", p.x, p.y),
            Command::Move(p) => write!(f, "move {} {}", p.x, p.y),
            Command::Up(p) => write!(f, "up {} {}", p.x, p.y),
            Command::Click(p) => write!(f, "click {} {}", p.x, p.y),
            Command::Color(c) => write!(f, "color {} {} {}", c.r, c.g, c.b),
            Command::Alpha(a) => write!(f, "alpha {}", a),
            Command::Zoom(index) => write!(f, "zoom {}", index),
            Command::Pan(p) => write!(f, "pan {} {}", p.x, p.y),
        }
    }
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut tokens = Tokens::new(source);
        let mut commands = Vec::new();
        while let Some((line, keyword)) = tokens.next() {
            let command = match keyword {
                "mode" => {
                    let name = tokens.word(keyword, line)?;
                    let mode = name
                        .parse::<DrawingMode>()
                        .with_context(|| format!("line {}: bad `mode` argument", line))?;
                    Command::Mode(mode)
                }
                "down" => Command::Down(tokens.point(keyword, line)?),
                "move" => Command::Move(tokens.point(keyword, line)?),
                "up" => Command::Up(tokens.point(keyword, line)?),
                "click" => Command::Click(tokens.point(keyword, line)?),
                "color" => {
                    let r = tokens.number(keyword, line)?;
                    let g = tokens.number(keyword, line)?;
                    let b = tokens.number(keyword, line)?;
                    Command::Color(Color::rgb(r, g, b))
                }
                "alpha" => Command::Alpha(tokens.number(keyword, line)?),
                "zoom" => {
                    let word = tokens.word(keyword, line)?;
                    let index = word.parse::<usize>().with_context(|| {
                        format!("line {}: `zoom` expects a level index, found `{}`", line, word)
                    })?;
                    Command::Zoom(index)
                }
                "pan" => Command::Pan(tokens.point(keyword, line)?),
                other => bail!("line {}: unknown command `{}`", line, other),
            };
            commands.push(command);
        }
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Applies every command in order, stopping at the first failure.
    pub fn run(&self, canvas: &mut Canvas) -> anyhow::Result<()> {
        for (step, command) in self.commands.iter().enumerate() {
            tracing::trace!("replay step {}: {}", step + 1, command);
            command
                .apply(canvas)
                .with_context(|| format!("step {} (`{}`) failed", step + 1, command))?;
        }
        tracing::debug!(
            "Replayed {} commands, {} shapes stored",
            self.commands.len(),
            canvas.model().len()
        );
        Ok(())
    }
}

impl FromStr for Script {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One line per stored shape, bottom to top: `#<id> <shape summary>`.
pub fn summarize(canvas: &Canvas) -> Vec<String> {
    canvas
        .model()
        .iter()
        .map(|object| format!("{} {}", object.id, object.shape))
        .collect()
}

struct Tokens<'a> {
    words: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        let words: Vec<(usize, &'a str)> = source
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                let code = line.split('#').next().unwrap_or_default();
                code.split_whitespace().map(move |word| (index + 1, word))
            })
            .collect();
        Self {
            words: words.into_iter(),
        }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        self.words.next()
    }

    fn word(&mut self, keyword: &str, line: usize) -> anyhow::Result<&'a str> {
        match self.words.next() {
            Some((_, word)) => Ok(word),
            None => bail!("line {}: `{}` is missing an argument", line, keyword),
        }
    }

    fn number(&mut self, keyword: &str, line: usize) -> anyhow::Result<f64> {
        let word = self.word(keyword, line)?;
        let value = word.parse::<f64>().with_context(|| {
            format!("line {}: `{}` expects a number, found `{}`", line, keyword, word)
        })?;
        if !value.is_finite() {
            bail!("line {}: `{}` expects a finite number", line, keyword);
        }
        Ok(value)
    }

    fn point(&mut self, keyword: &str, line: usize) -> anyhow::Result<Point> {
        let x = self.number(keyword, line)?;
        let y = self.number(keyword, line)?;
        Ok(Point::new(x, y))
    }
}
