//! Interactive session runner.
//!
//! Generic over the line source and the output sink so tests can drive whole
//! sessions from in-memory buffers. Flow: welcome + mode menu, then either the
//! incremental custom-shape loop or a random draw, then the query loop until
//! the `#` sentinel. EOF anywhere ends the session gracefully.

use std::io::{self, BufRead, Write};

use polyquiz::prelude::*;

use crate::input::{parse_line, Input};
use crate::prompts::Prompts;

pub struct Shell<R, W> {
    input: R,
    out: W,
    prompts: Prompts,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, prompts: Prompts, seed: Option<u64>) -> Self {
        Self {
            input,
            out,
            prompts,
            seed,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.prompts.welcome)?;
        self.out.flush()?;
        if let Some(mode) = self.read_line()? {
            let mode = mode.trim().to_string();
            tracing::info!(mode, "session start");
            match mode.as_str() {
                "1" => self.custom_shape()?,
                "2" => self.random_shape()?,
                _ => writeln!(self.out, "{}", self.prompts.invalid_mode)?,
            }
        }
        writeln!(self.out, "{}", self.prompts.goodbye)?;
        self.out.flush()
    }

    /// Mode 1: build a shape vertex by vertex until complete, then keep
    /// offering more vertices until the user finalizes with `#`.
    fn custom_shape(&mut self) -> io::Result<()> {
        let mut shape = Polygon::new();
        while !shape.is_complete() {
            let prompt = self.prompts.enter_coordinate(shape.len() + 1);
            writeln!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match parse_line(&line) {
                Input::Coord(c) => {
                    let accepted = shape.propose(c);
                    tracing::debug!(coord = %c, accepted, "propose");
                    if !accepted {
                        writeln!(self.out, "{}", self.prompts.rejected(c))?;
                    }
                    if shape.is_complete() {
                        break;
                    }
                    writeln!(self.out)?;
                    writeln!(self.out, "{}", self.prompts.incomplete_banner)?;
                    writeln!(self.out, "{shape}")?;
                }
                // Nothing to finalize yet; remind the user where they stand.
                Input::Finish => {
                    writeln!(self.out)?;
                    writeln!(self.out, "{}", self.prompts.incomplete_banner)?;
                    writeln!(self.out, "{shape}")?;
                }
                Input::Invalid(e) => {
                    writeln!(self.out, "{}", self.prompts.unreadable(&e))?;
                }
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", self.prompts.complete_banner)?;
        writeln!(self.out, "{shape}")?;

        loop {
            let prompt = self.prompts.finalize_or_enter(shape.len() + 1);
            writeln!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match parse_line(&line) {
                Input::Finish => break,
                Input::Coord(c) => {
                    let accepted = shape.propose(c);
                    tracing::debug!(coord = %c, accepted, "propose");
                    if !accepted {
                        writeln!(self.out, "{}", self.prompts.rejected(c))?;
                    }
                    writeln!(self.out)?;
                    writeln!(self.out, "{}", self.prompts.complete_banner)?;
                    writeln!(self.out, "{shape}")?;
                }
                Input::Invalid(e) => {
                    writeln!(self.out, "{}", self.prompts.unreadable(&e))?;
                }
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", self.prompts.finalized_banner)?;
        writeln!(self.out, "{shape}")?;
        self.query_loop(&shape)
    }

    /// Mode 2: draw a random shape and go straight to the query loop.
    ///
    /// The sampler does not re-check completeness, so the drawn shape can be
    /// degenerate; the session proceeds regardless, matching the engine's
    /// contract that guarding is the shell's (or here: nobody's) job.
    fn random_shape(&mut self) -> io::Result<()> {
        let shape = match self.seed {
            Some(seed) => {
                draw_polygon_uniform(UniformCfg::default(), ReplayToken { seed, index: 0 })
            }
            None => draw_polygon_default(),
        };
        tracing::info!(
            vertices = shape.len(),
            complete = shape.is_complete(),
            "random shape"
        );
        writeln!(self.out, "{}", self.prompts.random_banner)?;
        writeln!(self.out, "{shape}")?;
        self.query_loop(&shape)
    }

    fn query_loop(&mut self, shape: &Polygon) -> io::Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", self.prompts.query_prompt)?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match parse_line(&line) {
                Input::Finish => return Ok(()),
                Input::Coord(c) => {
                    let inside = shape.contains(c);
                    tracing::debug!(coord = %c, inside, "query");
                    let verdict = if inside {
                        self.prompts.inside(c)
                    } else {
                        self.prompts.outside(c)
                    };
                    writeln!(self.out, "{verdict}")?;
                }
                Input::Invalid(e) => {
                    writeln!(self.out, "{}", self.prompts.unreadable(&e))?;
                }
            }
        }
    }

    /// One line of input; `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(buf))
        }
    }
}
