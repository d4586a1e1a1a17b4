use anyhow::Result;
use clap::Parser;

use cdr3dist::engine;
use cdr3dist::input::args::DistArgs;

fn main() -> Result<()> {
    let args = DistArgs::parse();
    engine::run(args)
}
