use std::fs;

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Emit `count` random decimal integers of `digits` digits each, one
/// per line, to stdout or a file. Multi-digit numbers never start with
/// a zero, so the printed length is the real digit count.
pub fn generate(
    count: usize,
    digits: usize,
    output: Option<&str>,
    negative: bool,
    seed: Option<u64>,
) -> Result<()> {
    ensure!(digits > 0, "digit count must be at least 1");
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        lines.push(random_number(&mut rng, digits, negative));
    }

    match output {
        Some(path) => {
            // one newline per number; an empty batch writes an empty file
            let mut content = String::new();
            for line in &lines {
                content.push_str(line);
                content.push('\n');
            }
            fs::write(path, content).with_context(|| format!("cannot write {path}"))?;
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn random_number(rng: &mut StdRng, digits: usize, negative: bool) -> String {
    let mut out = String::with_capacity(digits + 1);
    if negative && rng.gen() {
        out.push('-');
    }
    for i in 0..digits {
        let low: u8 = if i == 0 && digits > 1 { 1 } else { 0 };
        out.push(char::from(b'0' + rng.gen_range(low..=9)));
    }
    out
}
