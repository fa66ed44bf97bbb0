//! Terminal simulation of a hand-turned rotary encoder.
//!
//! Reads keys from stdin, turns a virtual knob one Gray-code position per
//! key, and prints what the decoder makes of it.
//!
//! # Keys
//!
//! - `j`, `l`, `,` rotate left (counter-clockwise)
//! - `k`, `r`, `.` rotate right (clockwise)
//! - `f`, `h`, `t` switch to full-step, half-step or tristate
//! - `q` quit
//!
//! Keys may be typed several to a line; each is handled in turn.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin rotenc-sim --features cli
//! cargo run --bin rotenc-sim --features cli -- half
//! cargo run --bin rotenc-sim --features cli -- --config encoder.json
//!
//! # Log variant switches and ignored keys
//! RUST_LOG=debug cargo run --bin rotenc-sim --features cli
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use rotenc::sim::{Key, Simulator};
use rotenc::{Config, EncoderVariant};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config(std::env::args().skip(1))?;
    let mut sim = Simulator::from_config(config.encoder.variant, &config.simulation);

    println!("=================================");
    println!("  rotenc knob simulation");
    println!("=================================");
    println!("j/l/, left   k/r/. right   f/h/t switch   q quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", sim.prompt());
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        for c in line.chars().filter(|c| !c.is_whitespace()) {
            match sim.handle(Key::from_char(c)) {
                Some(frame) => {
                    println!("{}", frame);
                    print!("{}", sim.prompt());
                }
                None => {
                    println!();
                    return Ok(());
                }
            }
        }
        stdout.flush()?;
    }

    println!();
    Ok(())
}

/// Build configuration from `[VARIANT] [--config PATH]`.
fn load_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let mut variant: Option<EncoderVariant> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path))?;
                config = Config::from_json(&text).with_context(|| format!("parsing {}", path))?;
                log::info!("loaded config from {}", path);
            }
            other => {
                if variant.is_some() {
                    bail!("unexpected argument '{}'", other);
                }
                variant = Some(other.parse().with_context(|| format!("'{}'", other))?);
            }
        }
    }

    if let Some(v) = variant {
        config.encoder.variant = v;
    }
    log::debug!("starting with {}", config.encoder.variant);
    Ok(config)
}
