use anyhow::{bail, Context, Result};
use std::io::BufRead;
use std::str::FromStr;

use crate::world::{RawPlayer, RawSample, RawTurn, NUM_RESOURCES};

const PLAYER_FIELDS: usize = 3 + 2 * NUM_RESOURCES;
const SAMPLE_FIELDS: usize = 5 + NUM_RESOURCES;

/// Line-oriented reader for the game's stdin protocol.
///
/// Only framing is checked here (token counts, integers). Location and owner
/// tokens are passed through untouched for the snapshot to interpret.
pub struct TurnReader<R> {
    input: R,
    line: String,
    line_no: usize,
}

impl<R: BufRead> TurnReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_no: 0,
        }
    }

    /// Consumes the project list sent once before the first turn.
    pub fn read_preamble(&mut self) -> Result<Vec<[u32; NUM_RESOURCES]>> {
        let count: usize = {
            let line = self.require_line("project count")?;
            parse(line.trim(), "project count")?
        };

        // Counts come off the wire; truncation is caught by the per-line reads.
        let mut projects = Vec::new();
        for i in 0..count {
            let tokens = self.require_tokens(NUM_RESOURCES, "project")?;
            projects.push(
                parse_vector(&tokens).with_context(|| format!("project {}", i))?,
            );
        }
        Ok(projects)
    }

    /// Reads one whole turn. `Ok(None)` means input ended cleanly between turns.
    ///
    /// Blank lines between turns are skipped.
    pub fn read_turn(&mut self) -> Result<Option<RawTurn>> {
        let first = loop {
            match self.next_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break split(&line),
                None => return Ok(None),
            }
        };
        let me = parse_player(&first, self.line_no)?;

        let tokens = self.require_tokens(PLAYER_FIELDS, "opponent")?;
        let opponent = parse_player(&tokens, self.line_no)?;

        let tokens = self.require_tokens(NUM_RESOURCES, "availability")?;
        let available = parse_vector(&tokens).context("availability")?;

        let count: usize = {
            let line = self.require_line("sample count")?;
            parse(line.trim(), "sample count")?
        };

        let mut samples = Vec::new();
        for _ in 0..count {
            let tokens = self.require_tokens(SAMPLE_FIELDS, "sample")?;
            samples.push(parse_sample(&tokens).with_context(|| format!("line {}", self.line_no))?);
        }

        Ok(Some(RawTurn {
            me,
            opponent,
            available,
            samples,
        }))
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.line.clear();
        let read = self
            .input
            .read_line(&mut self.line)
            .context("reading stdin")?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(self.line.trim_end().to_string()))
    }

    fn require_line(&mut self, what: &str) -> Result<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => bail!("input ended while expecting {} after line {}", what, self.line_no),
        }
    }

    fn require_tokens(&mut self, expected: usize, what: &str) -> Result<Vec<String>> {
        let line = self.require_line(what)?;
        let tokens = split(&line);
        if tokens.len() != expected {
            bail!(
                "line {}: {} expects {} fields, got {}",
                self.line_no,
                what,
                expected,
                tokens.len()
            );
        }
        Ok(tokens)
    }
}

fn split(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn parse<T>(token: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    token
        .parse::<T>()
        .with_context(|| format!("invalid {} {:?}", what, token))
}

fn parse_vector(tokens: &[String]) -> Result<[u32; NUM_RESOURCES]> {
    let mut out = [0; NUM_RESOURCES];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse(token, "count")?;
    }
    Ok(out)
}

fn parse_player(tokens: &[String], line_no: usize) -> Result<RawPlayer> {
    if tokens.len() != PLAYER_FIELDS {
        bail!(
            "line {}: player expects {} fields, got {}",
            line_no,
            PLAYER_FIELDS,
            tokens.len()
        );
    }
    Ok(RawPlayer {
        location: tokens[0].clone(),
        eta: parse(&tokens[1], "eta")?,
        health: parse(&tokens[2], "health")?,
        storage: parse_vector(&tokens[3..3 + NUM_RESOURCES])?,
        expertise: parse_vector(&tokens[3 + NUM_RESOURCES..])?,
    })
}

fn parse_sample(tokens: &[String]) -> Result<RawSample> {
    Ok(RawSample {
        id: parse(&tokens[0], "sample id")?,
        owner: parse(&tokens[1], "owner")?,
        rank: parse(&tokens[2], "rank")?,
        expertise_gain: tokens[3].clone(),
        health: parse(&tokens[4], "health")?,
        cost: parse_vector(&tokens[5..])?,
    })
}
