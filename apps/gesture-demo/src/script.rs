//! Contact scripts: one `<phase> <x> <y> <t>` sample per line.

use anyhow::{anyhow, bail, Context, Result};
use tactile_foundation::{ContactPhase, ContactSample};

/// Played when no script file is given: a tap, a double tap, a long press
/// and a drag released with some speed.
pub const BUILTIN: &str = "\
# tap
start 100 100 0
end   101 100 60

# double tap
start 200 200 800
end   200 200 850
start 202 201 950
end   202 201 1000

# long press
start 300 300 1600
move  302 301 1900
end   302 301 2300

# drag and fling
start 0 0 3000
move  12 4 3016
move  40 10 3032
move  90 18 3048
move  150 25 3064
end   150 25 3070
";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub phase: ContactPhase,
    pub sample: ContactSample,
}

pub fn parse(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: '{}'", index + 1, raw))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<ScriptStep> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [phase, x, y, t] = fields.as_slice() else {
        bail!("expected 4 fields, found {}", fields.len());
    };
    let phase = match *phase {
        "start" | "down" => ContactPhase::Start,
        "move" => ContactPhase::Move,
        "end" | "up" => ContactPhase::End,
        other => return Err(anyhow!("unknown phase '{}'", other)),
    };
    let x: f32 = x.parse().context("x")?;
    let y: f32 = y.parse().context("y")?;
    let t: u64 = t.parse().context("t")?;
    Ok(ScriptStep {
        phase,
        sample: ContactSample::new(x, y, t),
    })
}
