//! Scripted navigation steps for `carousel show --script`.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use shared::domain::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Next,
    Prev,
    Select(Rank),
    Reload,
}

impl FromStr for ScriptStep {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| anyhow!("empty script step"))?
            .to_ascii_lowercase();

        let step = match verb.as_str() {
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "reload" => Self::Reload,
            "select" | "s" => {
                let rank = parts
                    .next()
                    .ok_or_else(|| anyhow!("select needs a rank"))?
                    .parse::<u32>()
                    .with_context(|| format!("invalid rank in step '{raw}'"))?;
                Self::Select(Rank(rank))
            }
            other => bail!("unknown script step '{other}'"),
        };

        if let Some(extra) = parts.next() {
            bail!("unexpected '{extra}' in step '{raw}'");
        }
        Ok(step)
    }
}

/// Parses a comma-separated list of steps, e.g. `next,next,prev,select 7`.
pub fn parse_script(raw: &str) -> anyhow::Result<Vec<ScriptStep>> {
    raw.split(',')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::parse)
        .collect()
}
